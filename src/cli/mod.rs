//! CLI infrastructure for the tictactoe binary
//!
//! This module provides the command-line interface for playing games
//! interactively and evaluating board positions.

pub mod commands;
pub mod output;
