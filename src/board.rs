//! Board state representation and the move/reset operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The symbol a player puts down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Cross,
    Circle,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Cross => Mark::Circle,
            Mark::Circle => Mark::Cross,
        }
    }

    /// Convert mark to the cell it occupies
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Cross => Cell::Cross,
            Mark::Circle => Cell::Circle,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Cross => write!(f, "Cross"),
            Mark::Circle => write!(f, "Circle"),
        }
    }
}

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Cross,
    Circle,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Cross => 'X',
            Cell::Circle => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Cross),
            'O' | 'o' | '0' => Some(Cell::Circle),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Cross => Some(Mark::Cross),
            Cell::Circle => Some(Mark::Circle),
            Cell::Empty => None,
        }
    }
}

/// Parse a bare cell array from board text.
///
/// Whitespace is filtered out; the remainder must be exactly 9 cell
/// characters (`X`, `O`, `.`, case-insensitive, `_` and `0` accepted).
/// No mark-count validation is performed, so logically inconsistent
/// boards parse fine; [`crate::evaluate`] is defined over all of them.
///
/// # Errors
///
/// Returns an error if the text does not contain exactly 9 cells or
/// contains a character that is not a cell.
pub fn cells_from_str(s: &str) -> Result<[Cell; 9], crate::Error> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() != 9 {
        return Err(crate::Error::InvalidBoardLength {
            expected: 9,
            got: chars.len(),
            context: s.to_string(),
        });
    }

    let mut cells = [Cell::Empty; 9];
    for (i, &c) in chars.iter().enumerate() {
        cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
            character: c,
            position: i,
            context: s.to_string(),
        })?;
    }

    Ok(cells)
}

/// The 3x3 grid and whose turn it is.
///
/// Cells are indexed 0-8 in row-major order. A cell is only ever written
/// by [`place_mark`](Board::place_mark) and only ever cleared by
/// [`reset`](Board::reset); the turn alternates strictly, Cross first.
/// The board knows nothing about outcomes. Classification lives in
/// [`crate::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    turn: Mark,
}

impl Board {
    /// Create a new empty board with Cross to move
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            turn: Mark::Cross,
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The mark that will be placed on the next successful move
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Get the cell at `index`, or `None` when out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check whether the cell at `index` is empty
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Place the current turn's mark at `index`.
    ///
    /// Returns `Ok(true)` if the mark was placed and the turn flipped.
    /// Returns `Ok(false)` without touching any state if the cell is
    /// already occupied; re-selecting a filled cell is defined no-op
    /// behavior, not a fault.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIndex`] if `index` is not in 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe::{Board, Cell, Mark};
    ///
    /// let mut board = Board::new();
    /// assert!(board.place_mark(4).unwrap());
    /// assert_eq!(board.get(4), Some(Cell::Cross));
    /// assert_eq!(board.turn(), Mark::Circle);
    ///
    /// // Second attempt on the same cell changes nothing
    /// assert!(!board.place_mark(4).unwrap());
    /// assert_eq!(board.get(4), Some(Cell::Cross));
    /// assert_eq!(board.turn(), Mark::Circle);
    /// ```
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn place_mark(&mut self, index: usize) -> Result<bool, crate::Error> {
        if index >= 9 {
            return Err(crate::Error::InvalidIndex { index });
        }

        if self.cells[index] != Cell::Empty {
            return Ok(false);
        }

        self.cells[index] = self.turn.to_cell();
        self.turn = self.turn.opponent();
        Ok(true)
    }

    /// Clear all cells and hand the turn back to Cross.
    ///
    /// Valid at any point in a game, including mid-game and after a
    /// terminal outcome.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
        self.turn = Mark::Cross;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse a board from cell text, inferring whose turn it is.
    ///
    /// Equal mark counts mean Cross moves next; one extra Cross means
    /// Circle moves next. Any other count combination cannot arise from
    /// alternating play and is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = cells_from_str(s)?;

        let cross = cells.iter().filter(|&&c| c == Cell::Cross).count();
        let circle = cells.iter().filter(|&&c| c == Cell::Circle).count();

        let turn = if cross == circle {
            Mark::Cross
        } else if cross == circle + 1 {
            Mark::Circle
        } else {
            return Err(crate::Error::InvalidMarkCounts { cross, circle });
        };

        Ok(Board { cells, turn })
    }
}
