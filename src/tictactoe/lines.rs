//! Winning line analysis for Tic-Tac-Toe

use super::{Grid, Mark};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First completed line in scan order, with the mark that completed it.
    ///
    /// Lines are tried in [`WINNING_LINES`] order and, for each line, Cross
    /// before Naught. A board where both marks hold a line reports whichever
    /// is found first.
    pub fn first_winning_line(grid: &Grid) -> Option<(Mark, [usize; 3])> {
        let cells = grid.cells();
        WINNING_LINES.iter().find_map(|&line| {
            Mark::ALL.into_iter().find_map(|mark| {
                let target = mark.to_cell();
                line.iter()
                    .all(|&idx| cells[idx] == target)
                    .then_some((mark, line))
            })
        })
    }

    /// Check if a mark has three in a row anywhere on the grid
    pub fn has_won(grid: &Grid, mark: Mark) -> bool {
        let target = mark.to_cell();
        let cells = grid.cells();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        Grid::parse(s).unwrap()
    }

    #[test]
    fn test_has_won_horizontal() {
        let g = grid("XXX......");
        assert!(LineAnalyzer::has_won(&g, Mark::Cross));
        assert!(!LineAnalyzer::has_won(&g, Mark::Naught));
    }

    #[test]
    fn test_has_won_vertical() {
        let g = grid("O..O..O..");
        assert!(LineAnalyzer::has_won(&g, Mark::Naught));
        assert!(!LineAnalyzer::has_won(&g, Mark::Cross));
    }

    #[test]
    fn test_has_won_diagonal() {
        let g = grid("..X.X.X..");
        assert_eq!(
            LineAnalyzer::first_winning_line(&g),
            Some((Mark::Cross, [2, 4, 6]))
        );
    }

    #[test]
    fn no_line_on_open_board() {
        assert_eq!(LineAnalyzer::first_winning_line(&grid("XOX.O.X..")), None);
        assert_eq!(LineAnalyzer::first_winning_line(&Grid::empty()), None);
    }

    #[test]
    fn rows_are_found_before_columns() {
        // X X X
        // X O O
        // X O .
        let g = grid("XXXXOOXO.");
        assert_eq!(
            LineAnalyzer::first_winning_line(&g),
            Some((Mark::Cross, [0, 1, 2]))
        );
    }

    #[test]
    fn double_winner_reports_first_in_scan_order() {
        // Unreachable through play, but the scan stays deterministic.
        let g = grid("OOOXXX...");
        assert_eq!(
            LineAnalyzer::first_winning_line(&g),
            Some((Mark::Naught, [0, 1, 2]))
        );
    }
}
