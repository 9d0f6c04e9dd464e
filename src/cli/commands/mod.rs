//! Subcommands of the `tictactoe` binary

pub mod play;
pub mod simulate;
