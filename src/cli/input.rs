//! Reading human moves from a terminal

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    Error, Result,
    players::MoveInput,
    tictactoe::{GameState, Move},
};

const COORDINATE_HINT: &str = "Please provide coordinates in the form of A1 or 1A";

/// Convert cell notation to a cell index.
///
/// A cell is named by a column letter `A`-`C` (either case) and a row digit
/// `1`-`3`, in either order: `B3` and `3b` both name index 7.
pub fn grid_to_index(input: &str) -> Result<usize> {
    let invalid = || Error::InvalidCoordinates {
        input: input.to_string(),
    };

    let chars: Vec<char> = input.chars().collect();
    let (col, row) = match chars.as_slice() {
        [c, r] if c.is_ascii_alphabetic() => (*c, *r),
        [r, c] if c.is_ascii_alphabetic() => (*c, *r),
        _ => return Err(invalid()),
    };

    let col = match col.to_ascii_uppercase() {
        c @ 'A'..='C' => c as usize - 'A' as usize,
        _ => return Err(invalid()),
    };
    let row = match row {
        r @ '1'..='3' => r as usize - '1' as usize,
        _ => return Err(invalid()),
    };

    Ok(3 * row + col)
}

/// Cell notation for an index, the inverse of [`grid_to_index`]
pub fn index_to_grid(index: usize) -> Option<String> {
    (index < 9).then(|| {
        let col = (b'A' + (index % 3) as u8) as char;
        format!("{col}{}", index / 3 + 1)
    })
}

/// Prompts for moves on `output` and reads them line by line from `input`.
pub struct ConsoleInput<R, W> {
    input: R,
    output: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Console input on the process's standard streams.
    ///
    /// Holds the stdin lock; share one instance between human players rather
    /// than creating one per player.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MoveInput for ConsoleInput<R, W> {
    /// Prompt until the player names a cell on the board.
    ///
    /// Malformed coordinates are answered with a hint and a new prompt. An
    /// occupied cell is returned as [`Error::CellOccupied`] for the game loop
    /// to report. End of input yields `None`.
    fn read_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        while !state.game_over() {
            write!(self.output, "{}'s move: ", state.current_mark())
                .and_then(|_| self.output.flush())
                .map_err(|e| Error::io("write prompt", e))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| Error::io("read move", e))?;
            if read == 0 {
                return Ok(None);
            }

            match grid_to_index(line.trim()) {
                Ok(index) => return state.move_to(index).map(Some),
                Err(_) => writeln!(self.output, "{COORDINATE_HINT}")
                    .map_err(|e| Error::io("write hint", e))?,
            }
        }
        Ok(None)
    }
}
