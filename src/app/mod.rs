//! Application layer: turning configuration into a ready-to-play game.
//!
//! ```
//! use tictactoe_ai::app::{GameConfig, headless_game};
//! use tictactoe_ai::players::PlayerKind;
//!
//! let config = GameConfig::default()
//!     .with_players(PlayerKind::Minimax, PlayerKind::Minimax)
//!     .with_seed(7)
//!     .with_delay_ms(0);
//! let final_state = headless_game(&config)?.play(config.starting_mark)?;
//! assert!(final_state.tie());
//! # Ok::<(), tictactoe_ai::Error>(())
//! ```

pub mod config;

pub use config::GameConfig;

use crate::{
    Error, Result,
    engine::{NullRenderer, TicTacToe},
    players::ClosedInput,
};

/// A game between two computer players that renders nothing.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if either mark is configured as a
/// human player.
pub fn headless_game(config: &GameConfig) -> Result<TicTacToe> {
    if !(config.player_x.is_computer() && config.player_o.is_computer()) {
        return Err(Error::InvalidConfiguration {
            message: "headless games need computer players for both marks".to_string(),
        });
    }
    let (player_x, player_o) = config.build_players(|_| Box::new(ClosedInput))?;
    TicTacToe::new(player_x, player_o, Box::new(NullRenderer))
}
