//! Terminal rendering of the board

use std::io::{self, Stdout, Write};

use crate::{
    Error, Result,
    engine::Renderer,
    tictactoe::{CELL_COUNT, Cell, GameState},
};

const CLEAR_SCREEN: &str = "\x1bc";

/// Wrap text in the ANSI blink attribute
pub fn blink(text: &str) -> String {
    format!("\x1b[5m{text}\x1b[0m")
}

/// The lettered and numbered board for nine cell labels
pub fn draw_grid(cells: &[String; CELL_COUNT]) -> String {
    let mut out = String::from("     A   B   C\n   ------------\n");
    for (row, chunk) in cells.chunks(3).enumerate() {
        if row > 0 {
            out.push_str("  ┆ ───┼───┼───\n");
        }
        out.push_str(&format!(
            "{} ┆  {} │ {} │ {}\n",
            row + 1,
            chunk[0],
            chunk[1],
            chunk[2]
        ));
    }
    out
}

fn cell_label(cell: Cell) -> String {
    match cell.mark() {
        Some(mark) => mark.to_string(),
        None => " ".to_string(),
    }
}

/// Draws each state to a terminal, announcing the result once the game ends.
pub struct ConsoleRenderer<W> {
    out: W,
    clear_screen: bool,
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: true,
        }
    }

    /// Keep earlier frames on screen instead of clearing before each one.
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn frame(&self, state: &GameState) -> String {
        let mut labels: [String; CELL_COUNT] =
            std::array::from_fn(|i| cell_label(state.grid().cells()[i]));

        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        }

        match (state.winner(), state.winning_cells()) {
            (Some(winner), Some(line)) => {
                for index in line {
                    labels[index] = blink(&labels[index]);
                }
                frame.push_str(&draw_grid(&labels));
                frame.push_str(&format!("{winner} wins \u{1F389}\n"));
            }
            _ => {
                frame.push_str(&draw_grid(&labels));
                if state.tie() {
                    frame.push_str("No one wins this time \u{1F610}\n");
                }
            }
        }
        frame
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, state: &GameState) -> Result<()> {
        let frame = self.frame(state);
        self.out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::io("render board", e))
    }
}
