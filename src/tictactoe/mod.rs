//! Tic-Tac-Toe
//! Turn engine driving two players over a 3x3 board

use std::{fmt::Display, io};

use thiserror::Error;

use crate::console::Presenter;

/// Board, markers and look up tables
pub mod board;

/// Player capability and its variants
pub mod player;

use board::{Board, InvalidMove, lut::BOARD_SIZE, marker::Marker};
use player::{Player, PlayerSpec, SelectionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing
    InProgress,
    /// A line is owned by the marker
    Won(Marker),
    /// Board is full without any complete line
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(marker) => write!(f, "Won by {marker}"),
            GameStatus::Drawn => write!(f, "Drawn"),
        }
    }
}

/// Error that can occur during game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),
    #[error("Player could not select a position")]
    Selection(#[from] SelectionError),
    /// Move requested for the player who is not on turn
    #[error("Player {got} moved out of turn, {expected} is to move")]
    OutOfTurn { expected: Marker, got: Marker },
    /// Move requested after the game is finished
    #[error("Game is already finished")]
    GameFinished,
    #[error("Failed to present the game")]
    Presentation(#[source] io::Error),
}

#[derive(Debug)]
pub struct Game {
    /// Board state
    board: Board,
    /// Players in move order
    players: [Player; 2],
    /// Index of the player on turn
    current: usize,
    /// Positions played, in order
    history: Vec<usize>,
}

impl Game {
    /// New game, the first player plays crosses and moves first
    pub fn new(first: PlayerSpec, second: PlayerSpec) -> Self {
        let [cross, nought] = Marker::variants();
        Self {
            board: Board::new(),
            players: [Player::new(first, cross), Player::new(second, nought)],
            current: 0,
            history: Vec::with_capacity(BOARD_SIZE),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.current]
    }

    pub fn free_positions(&self) -> Vec<usize> {
        self.board.free_positions()
    }

    /// 1-based turn number, one more than the moves made so far
    pub fn turn_number(&self) -> usize {
        BOARD_SIZE + 1 - self.board.free_positions().len()
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// A win is checked before a full board
    pub fn status(&self) -> GameStatus {
        if let Some(marker) = self.board.winner() {
            GameStatus::Won(marker)
        } else if self.board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    fn switch_player(&mut self) {
        self.current = 1 - self.current;
    }

    /// Ask the player on turn for a position and apply it.
    ///
    /// An invalid position is returned as [`GameError::InvalidMove`] with the
    /// board untouched and the same player still on turn.
    /// The turn passes to the opponent unless the move ends the game.
    pub fn apply_move(&mut self, marker: Marker) -> Result<GameStatus, GameError> {
        if self.status().is_terminal() {
            return Err(GameError::GameFinished);
        }

        let mover = &mut self.players[self.current];
        if mover.marker() != marker {
            return Err(GameError::OutOfTurn {
                expected: mover.marker(),
                got: marker,
            });
        }

        let position = mover.select_position(&self.board)?;
        self.board.apply(position, marker)?;
        self.history.push(position);
        log::debug!(
            "[Game] Turn {turn}: {mover} played {position}",
            turn = self.history.len(),
            mover = self.players[self.current],
        );

        let status = self.status();
        if !status.is_terminal() {
            self.switch_player();
        }
        Ok(status)
    }

    /// Play turns until the game is finished, then report the outcome.
    ///
    /// Rejected positions are shown to the presenter and the same player is
    /// asked again.
    pub fn play<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<GameStatus, GameError> {
        log::info!(
            "[Game] Starting game: {} vs {}",
            self.players[0],
            self.players[1]
        );

        while !self.status().is_terminal() {
            presenter
                .show_turn(&self.board, self.current_player())
                .map_err(GameError::Presentation)?;

            let marker = self.current_player().marker();
            match self.apply_move(marker) {
                Ok(_) => {}
                Err(GameError::InvalidMove(error)) => {
                    log::warn!("[Game] Player {marker} made an invalid move: {error}");
                    presenter
                        .show_rejected(self.current_player(), &error)
                        .map_err(GameError::Presentation)?;
                }
                Err(e) => return Err(e),
            }
        }

        let status = self.status();
        let winner = match status {
            GameStatus::Won(_) => Some(self.current_player()),
            _ => None,
        };
        log::info!(
            "[Game] Game finished after {moves} moves: {status}",
            moves = self.history.len()
        );
        presenter
            .show_outcome(&self.board, status, winner)
            .map_err(GameError::Presentation)?;

        Ok(status)
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match self.status() {
            GameStatus::InProgress => write!(f, "Current player: {}", self.current_player()),
            GameStatus::Won(_) => write!(f, "Game finished! {} wins!", self.current_player()),
            GameStatus::Drawn => write!(f, "Game finished! It's a draw!"),
        }
    }
}
