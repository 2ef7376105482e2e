use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

use crate::tictactoe::board::lut::{self, CENTER, CORNERS, EDGES, LINES};

use super::{Agent, GameView, SelectionError};

/// Computer player.
///
/// Each turn the first rule yielding a position wins:
/// 1. Complete one of its own lines, otherwise block the opponent's.
/// 2. Answer an opening corner move with one of the corner trap replies.
/// 3. Center, then a corner, then an edge.
#[derive(Debug, Clone)]
pub struct Computer<R = Xoshiro256PlusPlus> {
    rng: R,
}

impl Computer {
    /// Computer seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(Xoshiro256PlusPlus::from_os_rng())
    }

    /// Deterministic computer
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Computer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Opening corner reply, chosen at random within the pair
    fn corner_trap(&mut self, view: &GameView<'_>) -> Option<usize> {
        corner_trap_replies(view)?.choose(&mut self.rng).copied()
    }

    /// Center first, then shuffled corners, then shuffled edges
    fn fallback(&mut self, view: &GameView<'_>) -> Option<usize> {
        let mut corners = CORNERS;
        corners.shuffle(&mut self.rng);
        let mut edges = EDGES;
        edges.shuffle(&mut self.rng);

        std::iter::once(CENTER)
            .chain(corners)
            .chain(edges)
            .find(|&position| view.board().is_free(position))
    }
}

impl<R: Rng> Agent for Computer<R> {
    fn select_position(&mut self, view: &GameView<'_>) -> Result<usize, SelectionError> {
        if let Some(position) = win_or_block(view) {
            log::debug!("[Computer] {} completes or blocks at {position}", view.marker());
            return Ok(position);
        }
        if let Some(position) = self.corner_trap(view) {
            log::debug!("[Computer] {} answers opening corner at {position}", view.marker());
            return Ok(position);
        }
        let position = self
            .fallback(view)
            .ok_or(SelectionError::NoFreePosition)?;
        log::debug!("[Computer] {} falls back to {position}", view.marker());
        Ok(position)
    }
}

/// Scan the lines for a winning move, or else a blocking move.
///
/// A winning move is returned as soon as it is found. When several lines need
/// blocking the last one in scan order is kept.
pub fn win_or_block(view: &GameView<'_>) -> Option<usize> {
    let board = view.board();
    let mut block = None;

    for line in LINES {
        let mut empty = line.iter().filter(|&&i| board[i].is_none());
        let (Some(&free), None) = (empty.next(), empty.next()) else {
            continue;
        };

        let owned_by = |marker| line.iter().filter(|&&i| board[i] == Some(marker)).count();
        if owned_by(view.marker()) == 2 {
            log::trace!("[Computer] Winning move at {free} on line {line:?}");
            return Some(free);
        }
        if owned_by(view.opponent()) == 2 {
            log::trace!("[Computer] Blocking candidate at {free} on line {line:?}");
            block = Some(free);
        }
    }

    block
}

/// Safe replies when the only occupied cell is an opponent corner
pub fn corner_trap_replies(view: &GameView<'_>) -> Option<[usize; 2]> {
    if view.turn_number() != 2 {
        return None;
    }
    let [opening] = view.board().positions_of(view.opponent())[..] else {
        return None;
    };
    lut::corner_trap_replies(opening)
}
