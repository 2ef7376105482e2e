use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use thiserror::Error;

/// Board indices look up tables
pub mod lut;

/// Player markers
pub mod marker;

use lut::{BOARD_SIZE, LINES};
use marker::Marker;

/// Board cell
/// `None`: Empty cell
/// `Some(marker)`: Cell occupied by `marker`
pub type Cell = Option<Marker>;

/// Errors that can occur when placing a marker on the board
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum InvalidMove {
    #[error("Invalid move: position {0} is out of range")]
    OutOfRange(usize),
    #[error("Invalid move: position {0} is already occupied")]
    Occupied(usize),
}

impl InvalidMove {
    /// Position the move was attempted on
    pub fn position(&self) -> usize {
        match self {
            InvalidMove::OutOfRange(position) | InvalidMove::Occupied(position) => *position,
        }
    }
}

/// 3x3 board, cells indexed in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board([Cell; BOARD_SIZE]);

impl Board {
    /// New empty board
    pub fn new() -> Self {
        Self([None; BOARD_SIZE])
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.0
    }

    /// Cell at `position`, `None` if outside of the board
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.0.get(position).copied()
    }

    pub fn is_free(&self, position: usize) -> bool {
        matches!(self.get(position), Some(None))
    }

    /// Indices of the empty cells in ascending order
    pub fn free_positions(&self) -> Vec<usize> {
        self.0.iter().positions(Option::is_none).collect()
    }

    /// Indices occupied by `marker` in ascending order
    pub fn positions_of(&self, marker: Marker) -> Vec<usize> {
        self.0
            .iter()
            .positions(|cell| *cell == Some(marker))
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Marker owning a complete line, if any
    pub fn winner(&self) -> Option<Marker> {
        LINES.iter().find_map(|line| {
            line.iter()
                .map(|&i| self.0[i])
                .all_equal_value()
                .ok()
                .flatten()
        })
    }

    pub fn has_line_win(&self) -> bool {
        self.winner().is_some()
    }

    /// Place `marker` on an empty cell
    pub fn apply(&mut self, position: usize, marker: Marker) -> Result<(), InvalidMove> {
        match self.0.get_mut(position) {
            None => Err(InvalidMove::OutOfRange(position)),
            Some(Some(_)) => Err(InvalidMove::Occupied(position)),
            Some(cell) => {
                *cell = Some(marker);
                Ok(())
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, position: usize) -> &Self::Output {
        debug_assert!(position < BOARD_SIZE, "Index out of bounds: {position}");
        &self.0[position]
    }
}

/// Board display
/// Rows are prefixed by their index and separated by `---+---+---`
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.0.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f, "  ---+---+---")?;
            }
            let row = row
                .iter()
                .map(|cell| cell.map_or('-', |marker| marker.symbol()))
                .join(" | ");
            writeln!(f, "{i}  {row}")?;
        }
        Ok(())
    }
}
