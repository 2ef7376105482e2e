#![allow(dead_code)]

use std::{collections::VecDeque, io};

use tictactoe_engine::{
    console::Presenter,
    tictactoe::{
        Game, GameStatus,
        board::{Board, InvalidMove, marker::Marker},
        player::{Agent, GameView, Player, PlayerSpec, SelectionError},
    },
};

/// Agent answering a fixed list of positions, in order
pub struct Scripted {
    positions: VecDeque<usize>,
}

impl Scripted {
    pub fn new(positions: impl IntoIterator<Item = usize>) -> Self {
        Self {
            positions: positions.into_iter().collect(),
        }
    }
}

impl Agent for Scripted {
    fn select_position(&mut self, _view: &GameView<'_>) -> Result<usize, SelectionError> {
        self.positions.pop_front().ok_or_else(|| {
            SelectionError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            ))
        })
    }
}

/// Game between two scripted players
pub fn scripted_game(
    crosses: impl IntoIterator<Item = usize>,
    noughts: impl IntoIterator<Item = usize>,
) -> Game {
    Game::new(
        PlayerSpec::new("Alice", Scripted::new(crosses)),
        PlayerSpec::new("Bob", Scripted::new(noughts)),
    )
}

/// Play every move of a scripted game, alternating from crosses
pub fn play_out(game: &mut Game, moves: usize) -> GameStatus {
    let mut status = game.status();
    for _ in 0..moves {
        let marker = game.current_player().marker();
        status = game.apply_move(marker).expect("Scripted move is valid");
    }
    status
}

/// Board with the given cells filled
pub fn board_with(crosses: &[usize], noughts: &[usize]) -> Board {
    let mut board = Board::new();
    for &position in crosses {
        board.apply(position, Marker::Cross).expect("Cross position is free");
    }
    for &position in noughts {
        board.apply(position, Marker::Nought).expect("Nought position is free");
    }
    board
}

/// Presenter keeping track of what it was asked to show
#[derive(Debug, Default)]
pub struct Recorder {
    pub turns: Vec<(Board, Marker)>,
    pub rejected: Vec<InvalidMove>,
    pub outcome: Option<(GameStatus, Option<String>)>,
}

impl Presenter for Recorder {
    fn show_turn(&mut self, board: &Board, player: &Player) -> io::Result<()> {
        self.turns.push((*board, player.marker()));
        Ok(())
    }

    fn show_rejected(&mut self, _player: &Player, error: &InvalidMove) -> io::Result<()> {
        self.rejected.push(*error);
        Ok(())
    }

    fn show_outcome(
        &mut self,
        _board: &Board,
        status: GameStatus,
        winner: Option<&Player>,
    ) -> io::Result<()> {
        self.outcome = Some((status, winner.map(|player| player.name().to_string())));
        Ok(())
    }
}
