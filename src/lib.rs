//! Tic-tac-toe with a minimax computer opponent
//!
//! This crate provides:
//! - An immutable game model whose states are validated on construction
//! - Exhaustive minimax search for the computer player
//! - Human, random and minimax players behind one game loop
//! - A terminal front-end for playing and for batch simulations

pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod players;
pub mod tictactoe;

pub use error::{Error, Result, StateViolation};
