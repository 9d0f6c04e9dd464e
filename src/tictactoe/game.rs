//! Immutable game state and the facts derived from it

use serde::{Deserialize, Serialize};

use super::{Grid, LineAnalyzer, Mark, validation::validate_game_state};
use crate::{Error, Result};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Tie,
}

/// A grid together with the mark that opened the game.
///
/// The side to move is never stored: marks alternate strictly, so it follows
/// from the piece counts and the starting mark. Every constructor validates,
/// including deserialization, so a `GameState` value always satisfies the
/// balance, starting-mark and winner rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    grid: Grid,
    starting_mark: Mark,
}

#[derive(Deserialize)]
struct UncheckedGameState {
    grid: Grid,
    starting_mark: Mark,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = Error;

    fn try_from(raw: UncheckedGameState) -> Result<Self> {
        GameState::new(raw.grid, raw.starting_mark)
    }
}

impl GameState {
    /// Create a game state, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the grid could not arise from
    /// alternating play opened by `starting_mark`.
    pub fn new(grid: Grid, starting_mark: Mark) -> Result<Self> {
        validate_game_state(&grid, starting_mark)?;
        Ok(GameState {
            grid,
            starting_mark,
        })
    }

    /// The fresh state at the beginning of a game
    pub fn empty(starting_mark: Mark) -> Self {
        GameState {
            grid: Grid::empty(),
            starting_mark,
        }
    }

    /// Parse a board in nine-character notation and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] for malformed notation and
    /// [`Error::InvalidState`] for an unreachable position.
    pub fn parse(board: &str, starting_mark: Mark) -> Result<Self> {
        GameState::new(Grid::parse(board)?, starting_mark)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// The mark whose turn it is
    pub fn current_mark(&self) -> Mark {
        if self.grid.x_count() == self.grid.o_count() {
            self.starting_mark
        } else {
            self.starting_mark.other()
        }
    }

    pub fn game_not_started(&self) -> bool {
        self.grid.empty_count() == self.grid.cells().len()
    }

    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::first_winning_line(&self.grid).map(|(mark, _)| mark)
    }

    /// Indices of the first completed line, in the same scan order as
    /// [`GameState::winner`]
    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        LineAnalyzer::first_winning_line(&self.grid).map(|(_, line)| line)
    }

    pub fn tie(&self) -> bool {
        self.winner().is_none() && self.grid.empty_count() == 0
    }

    pub fn game_over(&self) -> bool {
        self.winner().is_some() || self.tie()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(mark) => Some(GameOutcome::Win(mark)),
            None if self.tie() => Some(GameOutcome::Tie),
            None => None,
        }
    }

    /// Static score of a finished game from `mark`'s point of view: 1 for a
    /// win, -1 for a loss, 0 for a tie.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScoreUndefined`] while the game is still running.
    pub fn evaluate_score(&self, mark: Mark) -> Result<i32> {
        match self.outcome() {
            Some(GameOutcome::Tie) => Ok(0),
            Some(GameOutcome::Win(winner)) if winner == mark => Ok(1),
            Some(GameOutcome::Win(_)) => Ok(-1),
            None => Err(Error::ScoreUndefined),
        }
    }
}
