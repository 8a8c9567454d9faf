//! Tests for tic-tac-toe board rules and the game engine.

use dungeon_core::{Board, Game, GameStatus, MoveError, Player, Position, Square};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).expect("coordinates in range")
}

#[test]
fn test_position_round_trip() {
    assert_eq!(pos(0, 0).index(), 0);
    assert_eq!(pos(1, 1).index(), 4);
    assert_eq!(pos(2, 2).index(), 8);
    assert_eq!(Position::from_index(5), Some(pos(1, 2)));
    assert_eq!(Position::from_index(9), None);
    assert_eq!(Position::new(3, 0), None);
    assert_eq!(Position::new(0, 3), None);
}

#[test]
fn test_all_positions_are_row_major() {
    for (index, position) in Position::ALL.into_iter().enumerate() {
        assert_eq!(position.index(), index);
    }
}

#[test]
fn test_winner_detects_every_row() {
    for row in 0..3 {
        let mut board = Board::new();
        for col in 0..3 {
            board.set(pos(row, col), Square::Occupied(Player::X));
        }
        assert_eq!(board.winner(), Some(Player::X), "row {} should win", row);
    }
}

#[test]
fn test_winner_detects_every_column() {
    for col in 0..3 {
        let mut board = Board::new();
        for row in 0..3 {
            board.set(pos(row, col), Square::Occupied(Player::O));
        }
        assert_eq!(board.winner(), Some(Player::O), "column {} should win", col);
    }
}

#[test]
fn test_winner_detects_both_diagonals() {
    let mut board = Board::new();
    for i in 0..3 {
        board.set(pos(i, i), Square::Occupied(Player::X));
    }
    assert_eq!(board.winner(), Some(Player::X));

    let mut board = Board::new();
    for i in 0..3u8 {
        board.set(pos(i, 2 - i), Square::Occupied(Player::O));
    }
    assert_eq!(board.winner(), Some(Player::O));
}

#[test]
fn test_no_winner_on_empty_or_mixed_board() {
    let board = Board::new();
    assert_eq!(board.winner(), None);
    assert!(!board.is_full());

    // X O X / X O O / O X X - full board, no line.
    let mut board = Board::new();
    let marks = [
        Player::X,
        Player::O,
        Player::X,
        Player::X,
        Player::O,
        Player::O,
        Player::O,
        Player::X,
        Player::X,
    ];
    for (position, mark) in Position::ALL.into_iter().zip(marks) {
        board.set(position, Square::Occupied(mark));
    }
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
}

#[test]
fn test_game_alternates_players() {
    let mut game = Game::new(Player::X);
    assert_eq!(game.to_move(), Player::X);

    game.make_move(pos(1, 1)).unwrap();
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.board().get(pos(1, 1)), Square::Occupied(Player::X));
    assert_eq!(game.history(), &[pos(1, 1)]);
}

#[test]
fn test_game_rejects_occupied_square() {
    let mut game = Game::new(Player::X);
    game.make_move(pos(1, 1)).unwrap();

    let result = game.make_move(pos(1, 1));
    assert_eq!(result, Err(MoveError::SquareOccupied(pos(1, 1))));
}

#[test]
fn test_game_transitions_to_won() {
    let mut game = Game::new(Player::X);

    // X takes the top row while O wanders.
    game.make_move(pos(0, 0)).unwrap();
    game.make_move(pos(1, 1)).unwrap();
    game.make_move(pos(0, 1)).unwrap();
    game.make_move(pos(2, 0)).unwrap();
    game.make_move(pos(0, 2)).unwrap();

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.make_move(pos(2, 2)), Err(MoveError::GameOver));
}

#[test]
fn test_game_transitions_to_draw() {
    let mut game = Game::new(Player::X);

    // X O X / X O O / O X X played out to a draw.
    let order = [
        pos(0, 0),
        pos(0, 1),
        pos(0, 2),
        pos(1, 1),
        pos(1, 0),
        pos(1, 2),
        pos(2, 1),
        pos(2, 0),
        pos(2, 2),
    ];
    for position in order {
        game.make_move(position).unwrap();
    }

    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_board_display_shows_marks() {
    let mut board = Board::new();
    board.set(pos(0, 0), Square::Occupied(Player::X));
    board.set(pos(1, 1), Square::Occupied(Player::O));

    let rendered = board.display();
    assert!(rendered.starts_with("X|.|."));
    assert!(rendered.contains(".|O|."));
}
