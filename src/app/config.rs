//! Configuration for setting up a game.

use std::{fs, path::Path, time::Duration};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    players::{MoveInput, Player, PlayerKind},
    tictactoe::{Mark, validate_players},
};

/// Configuration for a game: who plays each mark, who opens, and how the
/// computer players behave.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::app::GameConfig;
/// use tictactoe_ai::players::PlayerKind;
/// use tictactoe_ai::tictactoe::Mark;
///
/// let config = GameConfig::default()
///     .with_players(PlayerKind::Random, PlayerKind::Minimax)
///     .with_starting_mark(Mark::Naught)
///     .with_seed(42)
///     .with_delay_ms(0);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who plays X
    pub player_x: PlayerKind,
    /// Who plays O
    pub player_o: PlayerKind,
    /// Which mark opens the game
    pub starting_mark: Mark,
    /// Random seed for reproducibility; O's generator uses `seed + 1`
    pub seed: Option<u64>,
    /// Pause before each computer move, in milliseconds
    pub delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Minimax,
            starting_mark: Mark::Cross,
            seed: None,
            delay_ms: 250,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| crate::Error::io(format!("read config {}", path.display()), e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Set the player kinds for X and O.
    pub fn with_players(mut self, player_x: PlayerKind, player_o: PlayerKind) -> Self {
        self.player_x = player_x;
        self.player_o = player_o;
        self
    }

    /// Set the opening mark.
    pub fn with_starting_mark(mut self, mark: Mark) -> Self {
        self.starting_mark = mark;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the computer thinking pause.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Kind of player configured for `mark`
    pub fn kind_for(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::Cross => self.player_x,
            Mark::Naught => self.player_o,
        }
    }

    /// Create the X and O players, in that order.
    ///
    /// `human_input` supplies the move source for any human player.
    pub fn build_players<F>(&self, mut human_input: F) -> Result<(Player, Player)>
    where
        F: FnMut(Mark) -> Box<dyn MoveInput>,
    {
        let mut build = |mark: Mark, offset: u64| {
            let rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
                None => StdRng::seed_from_u64(rand::random::<u64>()),
            };
            match self.kind_for(mark) {
                PlayerKind::Human => Player::human(mark, human_input(mark)),
                PlayerKind::Random => Player::random(mark, rng).with_delay(self.delay()),
                PlayerKind::Minimax => Player::minimax(mark, rng).with_delay(self.delay()),
            }
        };

        let player_x = build(Mark::Cross, 0);
        let player_o = build(Mark::Naught, 1);
        validate_players(player_x.mark(), player_o.mark())?;
        Ok((player_x, player_o))
    }
}
