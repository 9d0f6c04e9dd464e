//! Common test utilities for the tic-tac-toe test suite.
//!
//! This module provides board construction and game-tree walking helpers
//! used across multiple tests.

#![allow(dead_code)]

use std::collections::HashSet;

use tictactoe_ai::{
    Result,
    players::MoveInput,
    tictactoe::{GameState, Mark, Move},
};

/// Parse a board that the test knows to be valid.
pub fn state(board: &str, starting_mark: Mark) -> GameState {
    GameState::parse(board, starting_mark)
        .unwrap_or_else(|e| panic!("test board {board} should be valid: {e}"))
}

/// Play `cells` in order from an empty board.
pub fn play_sequence(starting_mark: Mark, cells: &[usize]) -> GameState {
    cells.iter().fold(GameState::empty(starting_mark), |state, &cell| {
        *state.move_to(cell).unwrap().after_state()
    })
}

/// Every distinct state reachable from an empty board opened by `starting_mark`.
pub fn reachable_states(starting_mark: Mark) -> HashSet<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::empty(starting_mark)];
    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        for mv in state.possible_moves().unwrap() {
            stack.push(*mv.after_state());
        }
    }
    seen
}

/// Input that plays a fixed list of cells, then runs out.
pub struct ScriptedInput {
    cells: Vec<usize>,
}

impl ScriptedInput {
    pub fn new(cells: &[usize]) -> Self {
        Self {
            cells: cells.to_vec(),
        }
    }
}

impl MoveInput for ScriptedInput {
    fn read_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        if self.cells.is_empty() {
            return Ok(None);
        }
        state.move_to(self.cells.remove(0)).map(Some)
    }
}
