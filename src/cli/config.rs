//! Game options shared across commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{app::GameConfig, players::PlayerKind, tictactoe::Mark};

/// Who plays, who opens, and how the computer players behave.
///
/// Flags override values loaded from `--config`, which in turn override the
/// command's defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Player controlling X
    #[arg(short = 'X', long, value_enum)]
    pub player_x: Option<PlayerKind>,

    /// Player controlling O
    #[arg(short = 'O', long, value_enum)]
    pub player_o: Option<PlayerKind>,

    /// Mark that opens the game
    #[arg(long, value_enum)]
    pub starting: Option<Mark>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// JSON file with game settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GameArgs {
    /// Layer the config file and command-line flags over `base`.
    pub fn resolve_with(&self, base: GameConfig) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => base,
        };

        if let Some(kind) = self.player_x {
            config.player_x = kind;
        }
        if let Some(kind) = self.player_o {
            config.player_o = kind;
        }
        if let Some(mark) = self.starting {
            config.starting_mark = mark;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        Ok(config)
    }
}
