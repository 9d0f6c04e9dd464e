//! Move generation: legal successors of a game state

use rand::{Rng, seq::IndexedRandom};
use serde::Serialize;

use super::{GameState, Mark};
use crate::{Error, Result};

/// A single ply: `mark` placed at `cell_index`, taking `before_state` to
/// `after_state`.
///
/// Only the move engine builds these, so a `Move` is always legal on its
/// `before_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    mark: Mark,
    cell_index: usize,
    before_state: GameState,
    after_state: GameState,
}

impl Move {
    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn cell_index(&self) -> usize {
        self.cell_index
    }

    pub fn before_state(&self) -> &GameState {
        &self.before_state
    }

    pub fn after_state(&self) -> &GameState {
        &self.after_state
    }
}

impl GameState {
    /// Place the current mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOccupied`] if `index` is off the board or the
    /// cell is taken.
    pub fn move_to(&self, index: usize) -> Result<Move> {
        if !self.grid().get(index).is_some_and(|cell| cell.is_empty()) {
            return Err(Error::CellOccupied { index });
        }

        let mark = self.current_mark();
        let after_state = GameState::new(self.grid().with_mark(index, mark), self.starting_mark())?;
        Ok(Move {
            mark,
            cell_index: index,
            before_state: *self,
            after_state,
        })
    }

    /// One move per empty cell, in ascending cell order; none once the game
    /// is over.
    pub fn possible_moves(&self) -> Result<Vec<Move>> {
        if self.game_over() {
            return Ok(Vec::new());
        }
        self.grid()
            .empty_positions()
            .into_iter()
            .map(|index| self.move_to(index))
            .collect()
    }

    /// A legal move chosen uniformly at random, or `None` in a terminal state
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<Move>> {
        Ok(self.possible_moves()?.choose(rng).copied())
    }
}
