//! Game state validation logic

use super::{Grid, LineAnalyzer, Mark};
use crate::error::{Error, Result, StateViolation};

/// Check that `grid` is reachable by alternating play when `starting_mark`
/// moved first.
///
/// The checks run in order and the first violation wins: mark-count balance,
/// then starting-mark consistency, then winner plausibility.
pub fn validate_game_state(grid: &Grid, starting_mark: Mark) -> Result<()> {
    validate_number_of_marks(grid, starting_mark)?;
    validate_starting_mark(grid, starting_mark)?;
    let winner = LineAnalyzer::first_winning_line(grid).map(|(mark, _)| mark);
    validate_winner(grid, starting_mark, winner)
}

/// Two players may never share a mark
pub fn validate_players(first: Mark, second: Mark) -> Result<()> {
    if first == second {
        return Err(Error::DuplicateMark { mark: first });
    }
    Ok(())
}

fn violation(grid: &Grid, starting_mark: Mark, violation: StateViolation) -> Error {
    Error::InvalidState {
        violation,
        x_count: grid.x_count(),
        o_count: grid.o_count(),
        starting_mark,
    }
}

fn validate_number_of_marks(grid: &Grid, starting_mark: Mark) -> Result<()> {
    if grid.x_count().abs_diff(grid.o_count()) > 1 {
        return Err(violation(grid, starting_mark, StateViolation::MarkImbalance));
    }
    Ok(())
}

fn validate_starting_mark(grid: &Grid, starting_mark: Mark) -> Result<()> {
    let (x, o) = (grid.x_count(), grid.o_count());
    let ahead = if x > o {
        Some(Mark::Cross)
    } else if o > x {
        Some(Mark::Naught)
    } else {
        None
    };

    match ahead {
        Some(mark) if mark != starting_mark => Err(violation(
            grid,
            starting_mark,
            StateViolation::WrongStartingMark,
        )),
        _ => Ok(()),
    }
}

/// A winner must have completed their line on a turn they played: the
/// starter wins one piece ahead, the second player wins level.
fn validate_winner(grid: &Grid, starting_mark: Mark, winner: Option<Mark>) -> Result<()> {
    let Some(winner) = winner else {
        return Ok(());
    };

    let own = grid.count(winner);
    let theirs = grid.count(winner.other());
    let plausible = if winner == starting_mark {
        own > theirs
    } else {
        own == theirs
    };

    if plausible {
        Ok(())
    } else {
        Err(violation(
            grid,
            starting_mark,
            StateViolation::ImplausibleWinner(winner),
        ))
    }
}
