//! Winning line geometry for the 3x3 board

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];
const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check whether the mark just written at `pos` completes a line.
    ///
    /// Only the row and column through `pos` are inspected, plus both
    /// diagonals when `pos` is even. On a 3x3 board the even indices are
    /// exactly the corners and the centre, which are the only cells that lie
    /// on a diagonal.
    pub fn completes_line(cells: &[Cell; 9], pos: usize, player: Player) -> bool {
        let target = player.to_cell();
        let row = pos / 3;
        if (0..3).all(|col| cells[row * 3 + col] == target) {
            return true;
        }

        let col = pos % 3;
        if (0..3).all(|row| cells[col + row * 3] == target) {
            return true;
        }

        if pos.is_multiple_of(2) {
            if MAIN_DIAGONAL.iter().all(|&idx| cells[idx] == target) {
                return true;
            }
            if ANTI_DIAGONAL.iter().all(|&idx| cells[idx] == target) {
                return true;
            }
        }

        false
    }

    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Full-scan winner lookup; `None` when nobody (or, invalidly, both) won
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        match (
            Self::has_won(cells, Player::X),
            Self::has_won(cells, Player::O),
        ) {
            (true, false) => Some(Player::X),
            (false, true) => Some(Player::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_completes_line_anti_diagonal_from_corner() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert!(LineAnalyzer::completes_line(&cells, 6, Player::X));
        assert!(LineAnalyzer::completes_line(&cells, 4, Player::X));
        assert!(!LineAnalyzer::completes_line(&cells, 6, Player::O));
    }

    #[test]
    fn test_edge_cell_never_checks_diagonals() {
        // Odd index 1 is an edge; a diagonal elsewhere is not its concern.
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;
        cells[1] = Cell::X;

        assert!(!LineAnalyzer::completes_line(&cells, 1, Player::X));
        assert!(LineAnalyzer::completes_line(&cells, 8, Player::X));
    }

    #[test]
    fn shortcut_agrees_with_full_scan_for_single_line_boards() {
        for line in WINNING_LINES {
            let mut cells = [Cell::Empty; 9];
            for &idx in &line {
                cells[idx] = Cell::O;
            }
            for &idx in &line {
                assert!(
                    LineAnalyzer::completes_line(&cells, idx, Player::O),
                    "line {line:?} not detected from {idx}"
                );
            }
            assert!(LineAnalyzer::has_won(&cells, Player::O));
        }
    }
}
