use std::io;

use crate::{
    console::Prompt,
    tictactoe::board::{InvalidMove, lut::BOARD_SIZE},
};

use super::{Agent, GameView, SelectionError};

/// Human player answering through a [`Prompt`]
#[derive(Debug)]
pub struct Human<P> {
    prompt: P,
}

impl<P: Prompt> Human<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }
}

impl<P: Prompt> Agent for Human<P> {
    /// Keep asking until the answer is a free position
    fn select_position(&mut self, view: &GameView<'_>) -> Result<usize, SelectionError> {
        if view.free_positions().is_empty() {
            return Err(SelectionError::NoFreePosition);
        }

        let message = format!(
            "Player {marker}, enter a position [0-{last}]: ",
            marker = view.marker(),
            last = BOARD_SIZE - 1
        );
        loop {
            let line = self.prompt.ask(&message)?.ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
            })?;

            let rejection = match line.trim().parse::<usize>() {
                Ok(position) if view.board().is_free(position) => {
                    log::debug!("[Human] Player {} selected {position}", view.marker());
                    return Ok(position);
                }
                Ok(position) if position >= BOARD_SIZE => {
                    InvalidMove::OutOfRange(position).to_string()
                }
                Ok(position) => InvalidMove::Occupied(position).to_string(),
                Err(_) => format!("Invalid move: {:?} is not a position", line.trim()),
            };
            log::trace!("[Human] Rejected input {line:?}");
            self.prompt.tell(&rejection)?;
        }
    }
}
