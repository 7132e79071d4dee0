//! Pure outcome classification for board positions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Mark};
use crate::lines::winning_line;

/// The result of classifying a board position.
///
/// Win variants carry the completed line's cell indices so a front end
/// can highlight it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty cell
    Playing,
    /// Cross holds the recorded line
    CrossWins([usize; 3]),
    /// Circle holds the recorded line
    CircleWins([usize; 3]),
    /// All nine cells filled, no completed line
    Draw,
}

impl Outcome {
    /// The winning mark, if the game has been won
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::CrossWins(_) => Some(Mark::Cross),
            Outcome::CircleWins(_) => Some(Mark::Circle),
            Outcome::Playing | Outcome::Draw => None,
        }
    }

    /// The completed line's cell indices, if the game has been won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::CrossWins(line) | Outcome::CircleWins(line) => Some(*line),
            Outcome::Playing | Outcome::Draw => None,
        }
    }

    /// Whether this outcome is terminal (won or drawn)
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Playing => write!(f, "in progress"),
            Outcome::CrossWins(_) => write!(f, "Cross wins"),
            Outcome::CircleWins(_) => write!(f, "Circle wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Classify a board position.
///
/// The check order is fixed: completed lines are scanned first, in
/// [`crate::WIN_LINES`] order. A full board with no line is a draw;
/// anything else is still in progress. A full board that contains a
/// line is therefore a win, never a draw.
///
/// This is a total function over all cell arrays, including positions
/// that alternating play could never produce. For such positions the
/// fixed scan order picks the winner deterministically.
///
/// # Examples
///
/// ```
/// use tictactoe::{cells_from_str, evaluate, Outcome};
///
/// let cells = cells_from_str("XXX OO. ...").unwrap();
/// assert_eq!(evaluate(&cells), Outcome::CrossWins([0, 1, 2]));
///
/// let cells = cells_from_str("XOX XOO OXX").unwrap();
/// assert_eq!(evaluate(&cells), Outcome::Draw);
/// ```
pub fn evaluate(cells: &[Cell; 9]) -> Outcome {
    if let Some((mark, line)) = winning_line(cells) {
        return match mark {
            Mark::Cross => Outcome::CrossWins(line),
            Mark::Circle => Outcome::CircleWins(line),
        };
    }

    if cells.iter().all(|&cell| cell != Cell::Empty) {
        Outcome::Draw
    } else {
        Outcome::Playing
    }
}
