//! Simulate command - Play many computer-vs-computer games and tally results

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::debug;

use crate::{
    app::{GameConfig, headless_game},
    cli::{
        config::GameArgs,
        output::{create_game_progress, format_rate, print_section, print_stats_table},
    },
    players::PlayerKind,
    tictactoe::{GameOutcome, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Play computer players against each other")]
pub struct SimulateArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Export the tally to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Results of a batch of games
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub player_x: PlayerKind,
    pub player_o: PlayerKind,
    pub starting_mark: Mark,
    pub seed: Option<u64>,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
}

impl SimulationSummary {
    fn new(config: &GameConfig) -> Self {
        Self {
            player_x: config.player_x,
            player_o: config.player_o,
            starting_mark: config.starting_mark,
            seed: config.seed,
            games: 0,
            x_wins: 0,
            o_wins: 0,
            ties: 0,
        }
    }

    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Mark::Cross) => self.x_wins += 1,
            GameOutcome::Win(Mark::Naught) => self.o_wins += 1,
            GameOutcome::Tie => self.ties += 1,
        }
    }

    pub fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::Cross => self.x_wins,
            Mark::Naught => self.o_wins,
        }
    }
}

/// Play `games` headless games. A seeded run gives game `i` the seed
/// `seed + 2i`, so the two players of every game draw from distinct streams.
pub fn run_simulation(
    config: &GameConfig,
    games: usize,
    progress: Option<&ProgressBar>,
) -> crate::Result<SimulationSummary> {
    let mut summary = SimulationSummary::new(config);

    for i in 0..games {
        let mut game_config = config.clone();
        game_config.seed = config
            .seed
            .map(|seed| seed.wrapping_add(2u64.wrapping_mul(i as u64)));

        let final_state = headless_game(&game_config)?.play(config.starting_mark)?;
        // A finished game always has an outcome.
        if let Some(outcome) = final_state.outcome() {
            debug!(game = i, board = %final_state.grid(), ?outcome, "simulated game");
            summary.record(outcome);
        }

        if let Some(pb) = progress {
            pb.inc(1);
            pb.set_message(format!(
                "X {} / O {} / tie {}",
                summary.x_wins, summary.o_wins, summary.ties
            ));
        }
    }

    Ok(summary)
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let base = GameConfig::default()
        .with_players(PlayerKind::Random, PlayerKind::Minimax)
        .with_delay_ms(0);
    let config = args.game.resolve_with(base)?;

    for mark in Mark::ALL {
        if config.kind_for(mark) == PlayerKind::Human {
            bail!("Simulations need computer players, but {mark} is set to human");
        }
    }

    print_section("Simulation");
    let seed = config
        .seed
        .map_or_else(|| "random".to_string(), |s| s.to_string());
    print_stats_table(&[
        ("X", &config.player_x.to_string()),
        ("O", &config.player_o.to_string()),
        ("Starting mark", &config.starting_mark.to_string()),
        ("Games", &args.games.to_string()),
        ("Seed", &seed),
    ]);

    let progress = if args.no_progress {
        None
    } else {
        Some(create_game_progress(args.games as u64)?)
    };
    let summary = run_simulation(&config, args.games, progress.as_ref())?;
    if let Some(pb) = &progress {
        pb.finish_with_message("done");
    }

    print_section("Results");
    print_stats_table(&[
        (
            "X wins",
            &format!("{} ({})", summary.x_wins, format_rate(summary.x_wins, summary.games)),
        ),
        (
            "O wins",
            &format!("{} ({})", summary.o_wins, format_rate(summary.o_wins, summary.games)),
        ),
        (
            "Ties",
            &format!("{} ({})", summary.ties, format_rate(summary.ties, summary.games)),
        ),
    ]);

    if let Some(path) = &args.export {
        export_summary(&summary, path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}

/// Export the tally as pretty-printed JSON
pub fn export_summary(summary: &SimulationSummary, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary).context("Failed to write results")?;
    Ok(())
}
