use std::{fmt::Display, io};

use thiserror::Error;

use crate::tictactoe::board::{Board, lut::BOARD_SIZE, marker::Marker};

/// Human player reading positions from an input collaborator
pub mod human;

/// Heuristic computer player
pub mod computer;

/// Read-only view of the game handed to an agent on its turn
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    board: &'a Board,
    marker: Marker,
}

impl<'a> GameView<'a> {
    /// View of `board` from the side playing `marker`
    pub fn new(board: &'a Board, marker: Marker) -> Self {
        Self { board, marker }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn free_positions(&self) -> Vec<usize> {
        self.board.free_positions()
    }

    /// Marker of the side to move
    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn opponent(&self) -> Marker {
        self.marker.opponent()
    }

    /// 1-based turn number
    pub fn turn_number(&self) -> usize {
        BOARD_SIZE + 1 - self.board.free_positions().len()
    }
}

/// Errors that can occur while an agent selects a position
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Failed to read player input")]
    Input(#[from] io::Error),
    #[error("No free position left to select")]
    NoFreePosition,
}

/// Move selection capability
pub trait Agent {
    /// Select a position for the side to move.
    /// Must not mutate anything the engine owns; the engine applies the move.
    fn select_position(&mut self, view: &GameView<'_>) -> Result<usize, SelectionError>;
}

/// A seat at the table: identity plus move selection
pub struct Player {
    name: String,
    marker: Marker,
    agent: Box<dyn Agent>,
}

impl Player {
    pub(crate) fn new(spec: PlayerSpec, marker: Marker) -> Self {
        Self {
            name: spec.name,
            marker,
            agent: spec.agent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub(crate) fn select_position(
        &mut self,
        board: &Board,
    ) -> Result<usize, SelectionError> {
        let view = GameView::new(board, self.marker);
        self.agent.select_position(&view)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{name} ({marker})", name = self.name, marker = self.marker)
    }
}

/// Player specification used to create a game.
/// The engine assigns the marker.
pub struct PlayerSpec {
    name: String,
    agent: Box<dyn Agent>,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, agent: impl Agent + 'static) -> Self {
        Self {
            name: name.into(),
            agent: Box::new(agent),
        }
    }
}
