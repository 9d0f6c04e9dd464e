//! Test suite for the tic-tac-toe game model
//! Validates state invariants and game rules over the whole game tree

mod common;

use common::{play_sequence, reachable_states, state};
use tictactoe_ai::{
    Error, StateViolation,
    tictactoe::{Cell, GameOutcome, GameState, Grid, Mark},
};

mod reachable_states {
    use super::*;

    #[test]
    fn test_every_reachable_board_is_counted() {
        // Includes the empty board and every finished game.
        assert_eq!(reachable_states(Mark::Cross).len(), 5478);
        assert_eq!(reachable_states(Mark::Naught).len(), 5478);
    }

    #[test]
    fn test_mark_counts_stay_balanced() {
        for mark in Mark::ALL {
            for state in reachable_states(mark) {
                let grid = state.grid();
                let starter = grid.count(state.starting_mark());
                let other = grid.count(state.starting_mark().other());
                assert!(
                    starter == other || starter == other + 1,
                    "unbalanced board {grid}"
                );
            }
        }
    }

    #[test]
    fn test_reachable_states_revalidate() {
        for state in reachable_states(Mark::Cross) {
            let rebuilt = GameState::new(*state.grid(), state.starting_mark()).unwrap();
            assert_eq!(rebuilt, state);
        }
    }

    #[test]
    fn test_move_count_matches_empty_cells() {
        for state in reachable_states(Mark::Naught) {
            let moves = state.possible_moves().unwrap();
            if state.game_over() {
                assert!(moves.is_empty(), "moves offered on finished {}", state.grid());
            } else {
                assert_eq!(moves.len(), state.grid().empty_count());
            }
        }
    }

    #[test]
    fn test_each_move_places_exactly_one_mark() {
        for state in reachable_states(Mark::Cross) {
            for mv in state.possible_moves().unwrap() {
                let before = state.grid();
                let after = mv.after_state().grid();
                assert_eq!(mv.before_state(), &state);
                assert_eq!(mv.mark(), state.current_mark());
                assert_eq!(after.empty_count() + 1, before.empty_count());
                assert_eq!(after.count(mv.mark()), before.count(mv.mark()) + 1);
                assert_eq!(after.get(mv.cell_index()), Some(mv.mark().to_cell()));

                let changed = (0..9)
                    .filter(|&i| before.get(i) != after.get(i))
                    .count();
                assert_eq!(changed, 1);
            }
        }
    }

    #[test]
    fn test_terminal_states_have_exactly_one_outcome() {
        for state in reachable_states(Mark::Cross) {
            match state.outcome() {
                Some(GameOutcome::Win(mark)) => {
                    assert!(!state.tie());
                    assert_eq!(state.evaluate_score(mark).unwrap(), 1);
                    assert_eq!(state.evaluate_score(mark.other()).unwrap(), -1);
                }
                Some(GameOutcome::Tie) => {
                    assert_eq!(state.grid().empty_count(), 0);
                    assert_eq!(state.evaluate_score(Mark::Cross).unwrap(), 0);
                }
                None => assert!(matches!(
                    state.evaluate_score(Mark::Cross),
                    Err(Error::ScoreUndefined)
                )),
            }
        }
    }
}

mod grid_notation {
    use super::*;

    #[test]
    fn test_text_round_trips_for_reachable_boards() {
        for state in reachable_states(Mark::Naught) {
            let text = state.grid().to_string();
            assert_eq!(text.len(), 9);
            assert_eq!(Grid::parse(&text).unwrap(), *state.grid());
        }
    }

    #[test]
    fn test_cells_round_trip() {
        let grid = Grid::parse("XO.OX..XO").unwrap();
        assert_eq!(Grid::from_cells(grid.cells()).unwrap(), grid);
        assert_eq!(grid.get(2), Some(Cell::Empty));
        assert_eq!(grid.get(9), None);
    }

    #[test]
    fn test_malformed_boards_are_rejected() {
        for text in ["", "XO", "XO.OX..XO.", "XO.OX..X?", "xo.......", "XO OX..XO"] {
            assert!(
                matches!(Grid::parse(text), Err(Error::InvalidFormat { .. })),
                "{text:?} should be rejected"
            );
        }
        assert!(matches!(
            Grid::from_cells(&[Cell::Empty; 8]),
            Err(Error::InvalidFormat { .. })
        ));
    }
}

mod invalid_states {
    use super::*;

    fn violation(board: &str, starting_mark: Mark) -> StateViolation {
        match GameState::parse(board, starting_mark) {
            Err(Error::InvalidState { violation, .. }) => violation,
            other => panic!("{board} should be an invalid state, got {other:?}"),
        }
    }

    #[test]
    fn test_too_many_of_one_mark() {
        assert_eq!(violation("XXX......", Mark::Cross), StateViolation::MarkImbalance);
        assert_eq!(violation("OO.......", Mark::Naught), StateViolation::MarkImbalance);
    }

    #[test]
    fn test_the_leading_mark_must_have_started() {
        assert_eq!(violation("X........", Mark::Naught), StateViolation::WrongStartingMark);
        assert_eq!(violation("XO.O.....", Mark::Cross), StateViolation::WrongStartingMark);
    }

    #[test]
    fn test_winner_must_have_moved_last() {
        // X completed the top row, yet O has already answered.
        assert_eq!(
            violation("XXXOO.O..", Mark::Cross),
            StateViolation::ImplausibleWinner(Mark::Cross)
        );
        // O completed the top row, yet X has moved again.
        assert_eq!(
            violation("OOOXX.XX.", Mark::Cross),
            StateViolation::ImplausibleWinner(Mark::Naught)
        );
    }

    #[test]
    fn test_the_same_board_depends_on_who_started() {
        assert!(GameState::parse("XXXOO.O..", Mark::Naught).is_ok());
        assert!(GameState::parse("XO.......", Mark::Naught).is_ok());
        assert!(GameState::parse("XO.......", Mark::Cross).is_ok());
    }
}

mod turn_order {
    use super::*;

    #[test]
    fn test_starting_mark_moves_first_and_turns_alternate() {
        for starting_mark in Mark::ALL {
            let mut state = GameState::empty(starting_mark);
            let mut expected = starting_mark;
            for cell in [4, 0, 8, 2] {
                assert_eq!(state.current_mark(), expected);
                state = *state.move_to(cell).unwrap().after_state();
                expected = expected.other();
            }
        }
    }

    #[test]
    fn test_naught_can_open() {
        let state = play_sequence(Mark::Naught, &[0, 4, 1, 8, 2]);
        assert_eq!(state.grid().to_string(), "OOO.X...X");
        assert_eq!(state.winner(), Some(Mark::Naught));
        assert_eq!(state.winning_cells(), Some([0, 1, 2]));
    }

    #[test]
    fn test_no_moves_after_a_win() {
        let finished = state("XXXOO....", Mark::Cross);
        assert!(finished.possible_moves().unwrap().is_empty());
        assert!(matches!(
            finished.move_to(8),
            Err(Error::InvalidState { .. })
        ));
    }

    #[test]
    fn test_occupied_and_off_board_cells_are_unavailable() {
        let state = state("X...O....", Mark::Cross);
        assert!(matches!(state.move_to(0), Err(Error::CellOccupied { index: 0 })));
        assert!(matches!(state.move_to(9), Err(Error::CellOccupied { index: 9 })));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_state_round_trips_through_json() {
        let original = play_sequence(Mark::Naught, &[4, 0, 8]);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#"{"grid":"X...O...O","starting_mark":"O"}"#);
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_invalid_state_is_rejected_on_load() {
        let result: Result<GameState, _> =
            serde_json::from_str(r#"{"grid":"XXX......","starting_mark":"X"}"#);
        assert!(result.is_err());
    }
}
