//! Play command - Play a game in the terminal

use std::{cell::RefCell, rc::Rc};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    app::GameConfig,
    cli::{config::GameArgs, input::ConsoleInput, renderer::ConsoleRenderer},
    engine::TicTacToe,
    players::MoveInput,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game in the terminal")]
pub struct PlayArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Keep earlier boards on screen instead of clearing it
    #[arg(long)]
    pub no_clear: bool,
}

/// What the console says about a move the game loop rejected
pub fn describe_rejection(err: &Error) -> String {
    match err {
        Error::CellOccupied { .. } => "That cell is already occupied.".to_string(),
        other => other.to_string(),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.game.resolve_with(GameConfig::default())?;

    // One terminal serves every human player.
    let console = Rc::new(RefCell::new(ConsoleInput::stdio()));
    let (player_x, player_o) = config
        .build_players(|_| Box::new(Rc::clone(&console)) as Box<dyn MoveInput>)
        .context("Failed to set up players")?;

    let mut renderer = ConsoleRenderer::stdout();
    if args.no_clear {
        renderer = renderer.without_clearing();
    }

    let mut game = TicTacToe::new(player_x, player_o, Box::new(renderer))?
        .with_error_handler(|err| println!("{}", describe_rejection(err)));

    game.play(config.starting_mark)
        .context("Game ended unexpectedly")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_cell_gets_a_friendly_message() {
        assert_eq!(
            describe_rejection(&Error::CellOccupied { index: 3 }),
            "That cell is already occupied."
        );
    }

    #[test]
    fn other_rejections_use_the_error_text() {
        let err = Error::InvalidCoordinates {
            input: "Z9".to_string(),
        };
        assert_eq!(describe_rejection(&err), err.to_string());
    }
}
