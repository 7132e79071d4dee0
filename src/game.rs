//! Game session: a board plus the move log and the cached outcome

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Board, Mark};
use crate::evaluator::{evaluate, Outcome};

/// A single recorded move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
}

/// A running game session.
///
/// Wraps a [`Board`] with the move log and the outcome cached after each
/// successful move. Once the outcome is terminal, the session stops
/// forwarding input to the board; only [`reset`](Game::reset) resumes play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    outcome: Outcome,
    moves: Vec<Move>,
}

impl Game {
    /// Start a fresh game with an empty board and Cross to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            outcome: Outcome::Playing,
            moves: Vec::new(),
        }
    }

    /// Resume a session from an existing position.
    ///
    /// The position is classified immediately, so a finished board
    /// yields a session that ignores input until [`reset`](Game::reset).
    /// The move log starts empty and records only moves made through
    /// this session.
    pub fn from_board(board: Board) -> Self {
        Game {
            outcome: evaluate(board.cells()),
            board,
            moves: Vec::new(),
        }
    }

    /// The current board position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The outcome as of the last successful move
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the game has ended in a win or a draw
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// All moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Play the current turn's mark at `index` and return the resulting
    /// outcome.
    ///
    /// Input after a terminal outcome is ignored entirely, including
    /// indices the board itself would reject. A move on an occupied cell
    /// is likewise ignored. Both cases return the current outcome with
    /// no state change.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIndex`] if the game is still in
    /// progress and `index` is not in 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe::{Game, Outcome};
    ///
    /// let mut game = Game::new();
    /// for index in [0, 3, 1, 4] {
    ///     game.play(index).unwrap();
    /// }
    /// assert_eq!(game.play(2).unwrap(), Outcome::CrossWins([0, 1, 2]));
    ///
    /// // Input after the win changes nothing
    /// assert_eq!(game.play(5).unwrap(), Outcome::CrossWins([0, 1, 2]));
    /// assert_eq!(game.moves().len(), 5);
    /// ```
    #[instrument(skip(self), fields(turn = ?self.board.turn(), outcome = %self.outcome))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, crate::Error> {
        if self.outcome.is_over() {
            debug!("input ignored, game is over");
            return Ok(self.outcome);
        }

        let mark = self.board.turn();
        if !self.board.place_mark(index)? {
            debug!("cell occupied, move ignored");
            return Ok(self.outcome);
        }

        self.moves.push(Move { index, mark });
        self.outcome = evaluate(self.board.cells());
        debug!(outcome = %self.outcome, "move played");
        Ok(self.outcome)
    }

    /// Abandon the current position and start over.
    ///
    /// Clears all session state. Valid at any point, mid-game or after
    /// a terminal outcome.
    pub fn reset(&mut self) {
        self.board.reset();
        self.outcome = Outcome::Playing;
        self.moves.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.outcome(), Outcome::Playing);
        assert!(!game.is_over());
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_play_records_moves() {
        let mut game = Game::new();
        game.play(4).unwrap();
        game.play(0).unwrap();

        assert_eq!(
            game.moves(),
            [
                Move { index: 4, mark: Mark::Cross },
                Move { index: 0, mark: Mark::Circle },
            ]
        );
    }

    #[test]
    fn test_outcome_latches_after_win() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.play(index).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::CrossWins([0, 1, 2]));

        // Any further input is ignored, even out-of-bounds indices
        assert_eq!(game.play(5).unwrap(), Outcome::CrossWins([0, 1, 2]));
        assert_eq!(game.play(99).unwrap(), Outcome::CrossWins([0, 1, 2]));
        assert_eq!(game.moves().len(), 5);
        assert_eq!(game.board().get(5), Some(Cell::Empty));
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut game = Game::new();
        game.play(4).unwrap();

        let outcome = game.play(4).unwrap();
        assert_eq!(outcome, Outcome::Playing);
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.board().turn(), Mark::Circle);
    }

    #[test]
    fn test_invalid_index_mid_game() {
        let mut game = Game::new();
        assert!(game.play(9).is_err());
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_reset_after_win() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.play(index).unwrap();
        }
        assert!(game.is_over());

        game.reset();
        assert_eq!(game, Game::new());

        // Play resumes normally
        assert_eq!(game.play(8).unwrap(), Outcome::Playing);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_reset_mid_game() {
        let mut game = Game::new();
        game.play(0).unwrap();
        game.play(4).unwrap();

        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_full_game_to_draw() {
        let mut game = Game::new();
        for index in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
            game.play(index).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(game.is_over());
        assert_eq!(game.moves().len(), 9);
    }

    #[test]
    fn test_from_board() {
        let board: Board = "XO. .X. ...".parse().unwrap();
        let mut game = Game::from_board(board);
        assert_eq!(game.outcome(), Outcome::Playing);
        assert!(game.moves().is_empty());

        // Cross has one extra mark, so Circle moves next
        game.play(2).unwrap();
        assert_eq!(game.moves(), [Move { index: 2, mark: Mark::Circle }]);

        // A finished position is terminal from the start
        let board: Board = "XXX OO. ...".parse().unwrap();
        let mut game = Game::from_board(board);
        assert_eq!(game.outcome(), Outcome::CrossWins([0, 1, 2]));
        assert_eq!(game.play(8).unwrap(), Outcome::CrossWins([0, 1, 2]));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_circle_win() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 8, 5] {
            game.play(index).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::CircleWins([3, 4, 5]));
    }
}
