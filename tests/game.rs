use assert_matches::assert_matches;
use tictactoe_engine::tictactoe::{
    Game, GameError, GameStatus,
    board::{InvalidMove, marker::Marker},
    player::{PlayerSpec, SelectionError, computer::Computer},
};

use common::{Recorder, Scripted, play_out, scripted_game};

mod common;

#[test]
fn test_new_game() {
    let game = scripted_game([], []);

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn_number(), 1);
    assert_eq!(game.free_positions().len(), 9);
    assert_eq!(game.current_player().name(), "Alice");
    assert_eq!(game.current_player().marker(), Marker::Cross);
    assert_eq!(game.opponent().name(), "Bob");
    assert_eq!(game.opponent().marker(), Marker::Nought);
    assert!(game.history().is_empty());
}

#[test]
fn test_apply_move_switches_player() {
    let mut game = scripted_game([0], [4]);

    let status = game.apply_move(Marker::Cross).unwrap();
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.current_player().marker(), Marker::Nought);
    assert_eq!(game.opponent().marker(), Marker::Cross);

    game.apply_move(Marker::Nought).unwrap();
    assert_eq!(game.current_player().marker(), Marker::Cross);
    assert_eq!(game.history(), &[0, 4]);
}

#[test]
fn test_turn_number_tracks_moves() {
    let mut game = scripted_game([0, 2, 7, 5], [4, 1, 8, 6]);

    for moves in 0..8 {
        assert_eq!(game.turn_number(), moves + 1);
        assert_eq!(game.turn_number(), 10 - game.free_positions().len());
        let marker = game.current_player().marker();
        game.apply_move(marker).unwrap();
    }
    assert_eq!(game.turn_number(), 9);
}

#[test]
fn test_top_row_win_keeps_winner_current() {
    let mut game = scripted_game([0, 1, 2], [3, 4]);

    let status = play_out(&mut game, 5);
    assert_eq!(status, GameStatus::Won(Marker::Cross));
    assert_eq!(game.status(), GameStatus::Won(Marker::Cross));
    assert_eq!(game.current_player().name(), "Alice");
    assert_eq!(game.free_positions().len(), 4);
}

#[test]
fn test_draw_fills_the_board() {
    let mut game = scripted_game([0, 2, 3, 7, 8], [1, 4, 5, 6]);

    let status = play_out(&mut game, 9);
    assert_eq!(status, GameStatus::Drawn);
    assert!(game.free_positions().is_empty());
    assert_eq!(game.history(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    // The final cross completes the 0-4-8 diagonal on a full board
    let mut game = scripted_game([0, 2, 4, 7, 8], [1, 3, 5, 6]);

    let status = play_out(&mut game, 9);
    assert!(game.free_positions().is_empty());
    assert_eq!(status, GameStatus::Won(Marker::Cross));
    assert_eq!(game.current_player().marker(), Marker::Cross);
}

#[test]
fn test_finished_game_absorbs_moves() {
    let mut game = scripted_game([0, 1, 2], [3, 4, 5]);
    play_out(&mut game, 5);

    assert_matches!(game.apply_move(Marker::Cross), Err(GameError::GameFinished));
    assert_matches!(game.apply_move(Marker::Nought), Err(GameError::GameFinished));
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_out_of_turn_move_is_rejected() {
    let mut game = scripted_game([0], [4]);

    assert_matches!(
        game.apply_move(Marker::Nought),
        Err(GameError::OutOfTurn {
            expected: Marker::Cross,
            got: Marker::Nought
        })
    );
    assert_eq!(game.turn_number(), 1);
}

#[test]
fn test_invalid_move_is_propagated() {
    let mut game = scripted_game([0, 10, 4], [0, 3]);
    game.apply_move(Marker::Cross).unwrap();

    // Occupied cell: board unchanged and noughts still on turn
    let before = *game.board();
    assert_matches!(
        game.apply_move(Marker::Nought),
        Err(GameError::InvalidMove(InvalidMove::Occupied(0)))
    );
    assert_eq!(*game.board(), before);
    assert_eq!(game.current_player().marker(), Marker::Nought);

    // Retry with a new selection
    game.apply_move(Marker::Nought).unwrap();

    // Out of range cell
    assert_matches!(
        game.apply_move(Marker::Cross),
        Err(GameError::InvalidMove(InvalidMove::OutOfRange(10)))
    );
    assert_eq!(game.current_player().marker(), Marker::Cross);
    assert_eq!(game.history(), &[0, 3]);

    game.apply_move(Marker::Cross).unwrap();
    assert_eq!(game.history(), &[0, 3, 4]);
}

#[test]
fn test_selection_error_is_propagated() {
    let mut game = scripted_game([], []);
    assert_matches!(
        game.apply_move(Marker::Cross),
        Err(GameError::Selection(SelectionError::Input(_)))
    );
}

#[test]
fn test_play_retries_rejected_positions() {
    let mut game = scripted_game([4, 4, 0, 9, 1, 2], [4, 3, 6, 5]);
    let mut recorder = Recorder::default();

    let status = game.play(&mut recorder).unwrap();
    assert_eq!(status, GameStatus::Won(Marker::Cross));
    assert_eq!(
        recorder.rejected,
        vec![
            InvalidMove::Occupied(4),
            InvalidMove::Occupied(4),
            InvalidMove::OutOfRange(9)
        ]
    );
    assert_eq!(
        recorder.outcome,
        Some((GameStatus::Won(Marker::Cross), Some("Alice".to_string())))
    );
    assert_eq!(game.history(), &[4, 3, 0, 6, 1, 5, 2]);
}

#[test]
fn test_play_reports_draw() {
    let mut game = scripted_game([0, 2, 3, 7, 8], [1, 4, 5, 6]);
    let mut recorder = Recorder::default();

    let status = game.play(&mut recorder).unwrap();
    assert_eq!(status, GameStatus::Drawn);
    assert_eq!(recorder.turns.len(), 9);
    assert!(recorder.rejected.is_empty());
    assert_eq!(recorder.outcome, Some((GameStatus::Drawn, None)));
}

#[test]
fn test_play_announces_each_turn() {
    let mut game = scripted_game([0, 1, 2], [3, 4]);
    let mut recorder = Recorder::default();
    game.play(&mut recorder).unwrap();

    let markers = recorder
        .turns
        .iter()
        .map(|(_, marker)| *marker)
        .collect::<Vec<_>>();
    assert_eq!(
        markers,
        vec![
            Marker::Cross,
            Marker::Nought,
            Marker::Cross,
            Marker::Nought,
            Marker::Cross
        ]
    );
    assert_eq!(recorder.turns[0].0.free_positions().len(), 9);
}

#[test]
fn test_play_stops_on_selection_error() {
    let mut game = scripted_game([0], []);
    let mut recorder = Recorder::default();

    assert_matches!(game.play(&mut recorder), Err(GameError::Selection(_)));
    assert_eq!(recorder.outcome, None);
}

#[test]
fn test_computers_never_play_invalid_moves() {
    for seed in 0..64 {
        let mut game = Game::new(
            PlayerSpec::new("Deep", Computer::seeded(seed)),
            PlayerSpec::new("Blue", Computer::seeded(seed + 1000)),
        );
        let mut recorder = Recorder::default();

        let status = game.play(&mut recorder).unwrap();
        assert!(status.is_terminal());
        assert!(recorder.rejected.is_empty(), "Seed {seed} rejected a move");
        assert_eq!(game.turn_number(), game.history().len() + 1);
    }
}

#[test]
fn test_computer_blocks_scripted_human() {
    let mut game = Game::new(
        PlayerSpec::new("Alice", Scripted::new([0, 4, 8])),
        PlayerSpec::new("Computer", Computer::seeded(7)),
    );
    game.apply_move(Marker::Cross).unwrap();
    game.apply_move(Marker::Nought).unwrap();
    game.apply_move(Marker::Cross).unwrap();

    // Crosses on 0 and 4 threaten 8
    let status = game.apply_move(Marker::Nought).unwrap();
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.history()[3], 8);
}
