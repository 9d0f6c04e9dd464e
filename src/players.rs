//! Players: the closed set of move sources the game loop talks to
//!
//! Human players read their moves from a [`MoveInput`]; the two computer
//! players pick moves themselves, uniformly at random or by minimax search.
//! Each computer player owns its random source so a seeded game replays
//! exactly.

use std::{cell::RefCell, fmt, rc::Rc, thread, time::Duration};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{GameState, Mark, Move, policy_move},
};

/// Pause before a computer player answers, so a watcher can follow the game
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(250);

/// Source of moves for a human player
pub trait MoveInput {
    /// Read the next move for `state`.
    ///
    /// Returns `Ok(None)` when the source has no more moves to give (for
    /// example, end of input).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOccupied`] when the chosen cell is taken; the game
    /// loop reports it and asks again.
    fn read_move(&mut self, state: &GameState) -> Result<Option<Move>>;
}

/// Several human players can share one input, such as a single terminal.
impl<T: MoveInput> MoveInput for Rc<RefCell<T>> {
    fn read_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        self.borrow_mut().read_move(state)
    }
}

/// Input that has no moves to give
#[derive(Debug, Default, Clone, Copy)]
pub struct ClosedInput;

impl MoveInput for ClosedInput {
    fn read_move(&mut self, _state: &GameState) -> Result<Option<Move>> {
        Ok(None)
    }
}

/// Which kind of player controls a mark
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
    Minimax,
}

impl PlayerKind {
    pub fn is_computer(self) -> bool {
        !matches!(self, PlayerKind::Human)
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Minimax => "minimax",
        };
        f.write_str(name)
    }
}

/// A participant in the game
pub enum Player {
    Human {
        mark: Mark,
        input: Box<dyn MoveInput>,
    },
    RandomComputer {
        mark: Mark,
        rng: StdRng,
        delay: Duration,
    },
    MinimaxComputer {
        mark: Mark,
        rng: StdRng,
        delay: Duration,
    },
}

impl Player {
    pub fn human(mark: Mark, input: Box<dyn MoveInput>) -> Self {
        Player::Human { mark, input }
    }

    pub fn random(mark: Mark, rng: StdRng) -> Self {
        Player::RandomComputer {
            mark,
            rng,
            delay: DEFAULT_COMPUTER_DELAY,
        }
    }

    pub fn minimax(mark: Mark, rng: StdRng) -> Self {
        Player::MinimaxComputer {
            mark,
            rng,
            delay: DEFAULT_COMPUTER_DELAY,
        }
    }

    /// Set the thinking pause of a computer player. Human players ignore it.
    pub fn with_delay(mut self, new_delay: Duration) -> Self {
        match &mut self {
            Player::RandomComputer { delay, .. } | Player::MinimaxComputer { delay, .. } => {
                *delay = new_delay;
            }
            Player::Human { .. } => {}
        }
        self
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human { mark, .. }
            | Player::RandomComputer { mark, .. }
            | Player::MinimaxComputer { mark, .. } => *mark,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Human { .. } => PlayerKind::Human,
            Player::RandomComputer { .. } => PlayerKind::Random,
            Player::MinimaxComputer { .. } => PlayerKind::Minimax,
        }
    }

    /// This player's move in `state`, or `None` if it has none to offer.
    pub fn get_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        match self {
            Player::Human { input, .. } => input.read_move(state),
            Player::RandomComputer { rng, delay, .. } => {
                pause(*delay);
                state.random_move(rng)
            }
            Player::MinimaxComputer { rng, delay, .. } => {
                pause(*delay);
                policy_move(state, rng)
            }
        }
    }

    /// Play one turn and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongTurn`] if it is not this player's turn,
    /// [`Error::NoMoveAvailable`] if the player offers no move, and whatever
    /// the move source itself reports.
    pub fn make_move(&mut self, state: &GameState) -> Result<GameState> {
        let mark = self.mark();
        let expected = state.current_mark();
        if mark != expected {
            return Err(Error::WrongTurn {
                player: mark,
                expected,
            });
        }

        let mv = self
            .get_move(state)?
            .ok_or(Error::NoMoveAvailable { mark })?;
        debug!(%mark, kind = %self.kind(), cell = mv.cell_index(), "player moved");
        Ok(*mv.after_state())
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("kind", &self.kind())
            .field("mark", &self.mark())
            .finish()
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
