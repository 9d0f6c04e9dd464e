//! Exhaustive minimax search over the tic-tac-toe game tree
//!
//! The search scores every line of play down to a finished game, with no
//! pruning and no depth limit. From any position the remaining tree is at
//! most 9! leaves, and far smaller once a few marks are down.

use rand::Rng;
use tracing::{debug, trace};

use super::{GameState, Mark, Move};
use crate::{Error, Result};

/// Pick the move with the best minimax score for the side to move.
///
/// Ties go to the first best move in cell order. Returns `None` when the
/// game is already over.
pub fn find_best_move(state: &GameState) -> Result<Option<Move>> {
    let maximizer = state.current_mark();
    let mut best: Option<(Move, i32)> = None;

    for candidate in state.possible_moves()? {
        let score = minimax(&candidate, maximizer, false)?;
        trace!(cell = candidate.cell_index(), score, "scored candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    if let Some((chosen, score)) = &best {
        debug!(
            board = %state.grid(),
            mark = %maximizer,
            cell = chosen.cell_index(),
            score,
            "minimax chose move"
        );
    }
    Ok(best.map(|(chosen, _)| chosen))
}

/// Score `mv` for `maximizer`, assuming both sides play perfectly afterwards.
///
/// `choose_highest` says whether the side replying to `mv` is the maximizer.
/// It flips at every ply.
pub fn minimax(mv: &Move, maximizer: Mark, choose_highest: bool) -> Result<i32> {
    let after = mv.after_state();
    if after.game_over() {
        return after.evaluate_score(maximizer);
    }

    let mut best: Option<i32> = None;
    for next in after.possible_moves()? {
        let score = minimax(&next, maximizer, !choose_highest)?;
        best = Some(match best {
            None => score,
            Some(current) if choose_highest => current.max(score),
            Some(current) => current.min(score),
        });
    }

    best.ok_or(Error::NoMoveAvailable {
        mark: after.current_mark(),
    })
}

/// Move choice of the minimax computer player.
///
/// On an empty board every opening scores the same, so the search is skipped
/// and a random opening is played instead.
pub fn policy_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<Option<Move>> {
    if state.game_not_started() {
        state.random_move(rng)
    } else {
        find_best_move(state)
    }
}
