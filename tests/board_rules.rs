//! Rules of the board: move application and win detection.

mod common;

use oxo::{Board, Cell, Error, GameOutcome, Player, tictactoe::LineAnalyzer};
use rand::{SeedableRng, rngs::StdRng};

fn board_with(x: &[usize], o: &[usize]) -> Board {
    let mut board = Board::new();
    for &pos in x {
        assert!(board.place(pos, Player::X));
    }
    for &pos in o {
        assert!(board.place(pos, Player::O));
    }
    board
}

#[test]
fn test_center_completes_main_diagonal() {
    let mut board = board_with(&[0, 8], &[]);
    assert_eq!(board.winner(), None);

    assert!(board.place(4, Player::X));
    assert_eq!(board.winner(), Some(Player::X));
}

#[test]
fn test_center_completes_middle_column() {
    let mut board = board_with(&[1, 7], &[]);
    assert!(board.place(4, Player::X));
    assert_eq!(board.winner(), Some(Player::X));
}

#[test]
fn test_center_without_line_is_no_win() {
    let mut board = board_with(&[1, 5], &[]);
    assert!(board.place(4, Player::X));
    assert_eq!(board.winner(), None);
}

#[test]
fn test_every_winning_line_is_detected_from_each_cell() {
    for line in oxo::tictactoe::WINNING_LINES {
        for (i, &last) in line.iter().enumerate() {
            let others: Vec<usize> = line
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &pos)| pos)
                .collect();
            let mut board = board_with(&others, &[]);
            assert_eq!(board.winner(), None, "line {line:?} won early");
            assert!(board.place(last, Player::X));
            assert_eq!(board.winner(), Some(Player::X), "line {line:?} via {last}");
        }
    }
}

#[test]
fn test_occupied_cell_is_rejected_without_change() {
    let mut board = board_with(&[4], &[0]);
    let before = board;

    assert!(!board.place(4, Player::O));
    assert!(!board.place(0, Player::X));
    assert_eq!(board, before);

    assert!(matches!(
        board.try_place(4, Player::O),
        Err(Error::InvalidMove { position: 4 })
    ));
    assert_eq!(board, before);
}

#[test]
fn test_shortcut_matches_full_scan_on_every_reachable_board() {
    for board in common::reachable_boards() {
        assert_eq!(
            board.winner(),
            LineAnalyzer::winner(board.cells()),
            "board {board}"
        );
    }
}

#[test]
fn test_random_lines_end_consistently() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let (positions, boards) = common::random_line(&mut rng);
        let last = boards[boards.len() - 1];

        assert!(last.is_terminal());
        assert_eq!(last.remaining_count(), 9 - positions.len());
        for board in &boards[..boards.len() - 1] {
            assert!(!board.is_terminal());
        }

        match last.outcome() {
            Some(GameOutcome::Win(player)) => {
                // The winner made the final move
                let mover = if positions.len() % 2 == 1 {
                    Player::X
                } else {
                    Player::O
                };
                assert_eq!(player, mover);
            }
            Some(GameOutcome::Draw) => assert_eq!(positions.len(), 9),
            None => panic!("line ended on an open board: {last}"),
        }
    }
}

#[test]
fn test_reachable_state_count() {
    // Distinct positions in tic-tac-toe, empty board included
    assert_eq!(common::reachable_boards().len(), 5478);
}

#[test]
fn test_parsed_board_matches_played_board() {
    let played = board_with(&[0, 4], &[3]);
    let parsed = Board::from_string("X..\nOX.\n...").unwrap();
    assert_eq!(parsed, played);
    assert_eq!(parsed.get(3), Cell::O);
    assert_eq!(parsed.to_move(), Player::O);
}
