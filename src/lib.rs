//! Tic-tac-toe game core
//!
//! This crate provides:
//! - Board state with strict turn alternation and safe mutation
//! - Pure win/draw evaluation over arbitrary positions
//! - A game session layer that logs moves and latches terminal outcomes
//! - A terminal front end for interactive play and position evaluation

pub mod board;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod lines;

pub use board::{cells_from_str, Board, Cell, Mark};
pub use error::{Error, Result};
pub use evaluator::{evaluate, Outcome};
pub use game::{Game, Move};
pub use lines::{winning_line, WIN_LINES};
