//! Marks, cells and the immutable 3x3 grid

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// One of the two player symbols
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Mark {
    #[serde(rename = "X")]
    #[value(name = "X", alias = "x")]
    Cross,
    #[serde(rename = "O")]
    #[value(name = "O", alias = "o")]
    Naught,
}

impl Mark {
    /// Both marks, in the order the winner scan tries them
    pub const ALL: [Mark; 2] = [Mark::Cross, Mark::Naught];

    /// Get the opposite mark
    pub fn other(self) -> Mark {
        match self {
            Mark::Cross => Mark::Naught,
            Mark::Naught => Mark::Cross,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Cross => Cell::Cross,
            Mark::Naught => Cell::Naught,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::Cross),
            "O" | "o" => Ok(Mark::Naught),
            other => Err(crate::Error::InvalidFormat {
                input: other.to_string(),
                reason: "a mark must be 'X' or 'O'".to_string(),
            }),
        }
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Cross,
    Naught,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Cross => 'X',
            Cell::Naught => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Cross),
            'O' => Some(Cell::Naught),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Cross => Some(Mark::Cross),
            Cell::Naught => Some(Mark::Naught),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

/// Immutable board content: nine cells in row-major order.
///
/// A grid is a plain value. Placing a mark produces a new grid through
/// [`Grid::with_mark`]; nothing mutates an existing one. Serialized as its
/// nine-character notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    pub fn new(cells: [Cell; CELL_COUNT]) -> Self {
        Grid { cells }
    }

    /// A grid with every cell empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from an arbitrary slice of cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFormat`] unless the slice holds exactly
    /// nine cells.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, crate::Error> {
        let array: [Cell; CELL_COUNT] =
            cells.try_into().map_err(|_| crate::Error::InvalidFormat {
                input: cells.iter().map(|c| c.to_char()).collect(),
                reason: format!("expected {CELL_COUNT} cells, got {}", cells.len()),
            })?;
        Ok(Grid { cells: array })
    }

    /// Parse a grid from nine characters of `X`, `O` or `.`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFormat`] if the string does not have
    /// exactly nine characters or contains any other character.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidFormat {
                input: s.to_string(),
                reason: format!("expected {CELL_COUNT} cells, got {}", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidFormat {
                input: s.to_string(),
                reason: format!("invalid character '{c}' at position {i}"),
            })?;
        }

        Ok(Grid { cells })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8), `None` when out of range
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::Cross => count.x += 1,
                Cell::Naught => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    pub fn x_count(&self) -> usize {
        self.count_pieces().x
    }

    pub fn o_count(&self) -> usize {
        self.count_pieces().o
    }

    pub fn empty_count(&self) -> usize {
        self.count_pieces().empty
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        match mark {
            Mark::Cross => self.x_count(),
            Mark::Naught => self.o_count(),
        }
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Copy of this grid with `mark` placed at `index`.
    ///
    /// The caller guarantees `index < 9`; occupancy is checked by the move
    /// engine, not here.
    #[must_use = "with_mark returns a new grid; the original is unchanged"]
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Grid {
        let mut cells = self.cells;
        cells[index] = mark.to_cell();
        Grid { cells }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl TryFrom<String> for Grid {
    type Error = crate::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Grid::parse(&s)
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> Self {
        grid.to_string()
    }
}
