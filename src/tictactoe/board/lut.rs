//! Board look up tables

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

/// Rows, columns and diagonals
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const CENTER: usize = 4;

pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Safe replies to an opening corner move
pub const CORNER_TRAP_REPLIES: [(usize, [usize; 2]); 4] =
    [(0, [1, 3]), (2, [1, 5]), (6, [3, 5]), (8, [5, 7])];

/// Look up the safe replies to an opening move on `corner`
pub fn corner_trap_replies(corner: usize) -> Option<[usize; 2]> {
    CORNER_TRAP_REPLIES
        .iter()
        .find(|(c, _)| *c == corner)
        .map(|(_, replies)| *replies)
}
