//! CLI infrastructure for the tic-tac-toe console
//!
//! This module provides the terminal front-end: parsing cell coordinates,
//! drawing the board, and the `play` and `simulate` commands.

pub mod commands;
pub mod config;
pub mod input;
pub mod output;
pub mod renderer;
