//! Tic-Tac-Toe engine
//!

/// Board, turn engine and players
pub mod tictactoe;

/// Console input and presentation collaborators
pub mod console;
