//! Tic-Tac-Toe game model, rules and search

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod moves;
pub mod validation;

pub use board::{CELL_COUNT, Cell, Grid, Mark};
pub use game::{GameOutcome, GameState};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::{find_best_move, minimax, policy_move};
pub use moves::Move;
pub use validation::{validate_game_state, validate_players};
