//! The game loop: render, ask the player on turn, apply, repeat

use tracing::{debug, info, warn};

use crate::{
    Error, Result,
    players::Player,
    tictactoe::{GameOutcome, GameState, Mark, validate_players},
};

/// Draws a game state for whoever is watching
pub trait Renderer {
    fn render(&mut self, state: &GameState) -> Result<()>;
}

/// Renderer that draws nothing, for headless games
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }
}

/// Callback told about errors the loop recovers from before retrying a turn
pub type ErrorHandler = Box<dyn FnMut(&Error)>;

/// A game of tic-tac-toe between two players
pub struct TicTacToe {
    player1: Player,
    player2: Player,
    renderer: Box<dyn Renderer>,
    error_handler: Option<ErrorHandler>,
}

impl TicTacToe {
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMark`] if both players use the same mark.
    pub fn new(player1: Player, player2: Player, renderer: Box<dyn Renderer>) -> Result<Self> {
        validate_players(player1.mark(), player2.mark())?;
        Ok(TicTacToe {
            player1,
            player2,
            renderer,
            error_handler: None,
        })
    }

    pub fn with_error_handler(mut self, handler: impl FnMut(&Error) + 'static) -> Self {
        self.error_handler = Some(Box::new(handler));
        self
    }

    /// Play a full game opened by `starting_mark` and return the final state.
    ///
    /// Recoverable errors (an occupied cell, unreadable coordinates) go to
    /// the error handler and the same player is asked again. Any other error
    /// ends the game and is returned.
    pub fn play(&mut self, starting_mark: Mark) -> Result<GameState> {
        let mut state = GameState::empty(starting_mark);
        debug!(%starting_mark, "game started");

        loop {
            self.renderer.render(&state)?;
            if let Some(outcome) = state.outcome() {
                match outcome {
                    GameOutcome::Win(mark) => {
                        info!(winner = %mark, board = %state.grid(), "game over")
                    }
                    GameOutcome::Tie => info!(board = %state.grid(), "game over, tie"),
                }
                return Ok(state);
            }

            let player = self.current_player(&state);
            match player.make_move(&state) {
                Ok(next) => state = next,
                Err(err) if err.is_recoverable() => {
                    warn!(mark = %player.mark(), error = %err, "move rejected, retrying turn");
                    if let Some(handler) = self.error_handler.as_mut() {
                        handler(&err);
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// The player whose mark is on turn. Marks are distinct, so when the
    /// first player does not match the second one does.
    fn current_player(&mut self, state: &GameState) -> &mut Player {
        if self.player1.mark() == state.current_mark() {
            &mut self.player1
        } else {
            &mut self.player2
        }
    }
}
