//! Tests for the board rules model.

use tictactoe_engine::{Board, Outcome, Player, Position};

fn board_after(starting: Player, moves: &[usize]) -> Board {
    let mut board = Board::new(starting);
    for &index in moves {
        board.play(index);
    }
    board
}

#[test]
fn test_top_row_win_scenario() {
    let board = board_after(Player::X, &[0, 4, 1, 8, 2]);

    assert_eq!(board.winner(), Some(Player::X));
    assert!(board.has_ended());
    assert_eq!(board.outcome(), Some(Outcome::Winner(Player::X)));
    for index in [0, 1, 2] {
        assert!(board.cell(index).is_matching(), "cell {index} should match");
    }
    for index in 3..9 {
        assert!(!board.cell(index).is_matching(), "cell {index} should not match");
    }
    // The winner stays current so front-ends can report who won.
    assert_eq!(board.current_player(), Player::X);
    assert_eq!(board.turns_played(), 5);
}

#[test]
fn test_turns_alternate_until_the_end() {
    let mut board = Board::new(Player::O);
    let mut expected = Player::O;
    for index in [4, 0, 8, 2] {
        assert_eq!(board.current_player(), expected);
        board.play(index);
        expected = expected.opponent();
    }
    assert_eq!(board.current_player(), Player::O);
}

#[test]
fn test_draw_detection() {
    // X O X / X O O / O X X
    let board = board_after(Player::X, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(board.has_ended());
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), Some(Outcome::Draw));
    assert!(board.cells().iter().all(|cell| !cell.is_matching()));
    assert!(board.empty_indices().is_empty());
    // The last mover stays current on a draw too.
    assert_eq!(board.current_player(), Player::X);
}

#[test]
fn test_final_move_completing_two_lines_marks_both() {
    // X holds 1, 2, 3, 6 and then takes the corner 0.
    let board = board_after(Player::X, &[1, 4, 2, 5, 3, 7, 6, 8, 0]);

    assert_eq!(board.winner(), Some(Player::X));
    let matching: Vec<_> = (0..9).filter(|&i| board.cell(i).is_matching()).collect();
    assert_eq!(matching, vec![0, 1, 2, 3, 6]);
    assert_eq!(board.outcome(), Some(Outcome::Winner(Player::X)));
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    // X O X / O X O / O X X, X finishing the main diagonal on move nine.
    let board = board_after(Player::X, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert_eq!(board.turns_played(), 9);
    assert_eq!(board.outcome(), Some(Outcome::Winner(Player::X)));
    let matching: Vec<_> = (0..9).filter(|&i| board.cell(i).is_matching()).collect();
    assert_eq!(matching, vec![0, 4, 8]);
}

#[test]
fn test_position_indices_drive_the_board() {
    let mut board = Board::new(Player::X);
    board.play(Position::Center.index());
    assert!(!board.is_empty(4));
    assert_eq!(Position::parse("5").map(Position::index), Some(4));
}
