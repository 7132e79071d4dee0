//! Winning line definitions and line scanning

use crate::board::{Cell, Mark};

/// All eight winning lines of tic-tac-toe, in fixed scan order.
///
/// The order matters: when a board carries more than one completed line,
/// [`winning_line`] reports the earliest entry in this table.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // diagonals
    [2, 4, 6],
];

/// Scan for a completed line, first match wins.
///
/// Returns the mark holding the line and the line's cell indices, or
/// `None` when no line is complete. Boards that could never arise from
/// alternating play are still scanned; the fixed table order makes the
/// answer deterministic for them too.
pub fn winning_line(cells: &[Cell; 9]) -> Option<(Mark, [usize; 3])> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c] {
            // Non-empty cell always maps to a mark
            return cells[a].mark().map(|mark| (mark, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cells_from_str;

    #[test]
    fn test_line_table_shape() {
        assert_eq!(WIN_LINES.len(), 8);
        for line in WIN_LINES {
            for index in line {
                assert!(index < 9, "line index {index} out of range");
            }
        }
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let cells = [Cell::Empty; 9];
        assert_eq!(winning_line(&cells), None);
    }

    #[test]
    fn test_each_line_detected_for_each_mark() {
        for line in WIN_LINES {
            for (cell, mark) in [(Cell::Cross, Mark::Cross), (Cell::Circle, Mark::Circle)] {
                let mut cells = [Cell::Empty; 9];
                for index in line {
                    cells[index] = cell;
                }
                assert_eq!(
                    winning_line(&cells),
                    Some((mark, line)),
                    "line {line:?} not detected for {mark}"
                );
            }
        }
    }

    #[test]
    fn test_first_match_tie_break() {
        // Two complete cross rows: the earlier table entry wins
        let cells = cells_from_str("XXX...XXX").unwrap();
        assert_eq!(winning_line(&cells), Some((Mark::Cross, [0, 1, 2])));

        // Column 0-3-6 and diagonal 0-4-8 both complete: column scans first
        let cells = cells_from_str("X..XX.X.X").unwrap();
        assert_eq!(winning_line(&cells), Some((Mark::Cross, [0, 3, 6])));
    }

    #[test]
    fn test_mixed_line_not_detected() {
        let cells = cells_from_str("XXO......").unwrap();
        assert_eq!(winning_line(&cells), None);
    }
}
