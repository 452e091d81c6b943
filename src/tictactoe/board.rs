//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player, which is also the mark it writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Order-sensitive snapshot of the nine cells, used as a cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey([Cell; 9]);

impl BoardKey {
    pub fn cells(&self) -> &[Cell; 9] {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

/// The 3x3 grid plus the winner recorded when a line was completed.
///
/// Searches mutate one board in place and restore it with `undo`,
/// so every trial move must be undone before its sibling is tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    winner: Option<Player>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            winner: None,
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is filtered out, then exactly the first nine characters are
    /// read as cells (`X`, `O`, and `.` or `_` for empty). The winner is
    /// recomputed from every line since there is no last move to go by.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells are given, a character is not a
    /// cell, or both players own a complete line.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        if LineAnalyzer::has_won(&cells, Player::X) && LineAnalyzer::has_won(&cells, Player::O) {
            return Err(crate::Error::ConflictingWinners {
                context: s.to_string(),
            });
        }

        Ok(Board {
            cells,
            winner: LineAnalyzer::winner(&cells),
        })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The player whose move completed a line, if any
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Claim `pos` for `player`.
    ///
    /// Returns `false` without touching the board when the cell is taken or
    /// `pos` is off the board. A successful placement that completes a line
    /// records the winner and still returns `true`.
    pub fn place(&mut self, pos: usize, player: Player) -> bool {
        if pos >= 9 || self.cells[pos] != Cell::Empty {
            return false;
        }

        self.cells[pos] = player.to_cell();
        if LineAnalyzer::completes_line(&self.cells, pos, player) {
            self.winner = Some(player);
        }
        true
    }

    /// Like [`Board::place`], but reports why a move was refused
    pub fn try_place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.place(pos, player) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        Ok(())
    }

    /// Clear a trial move made by a search and forget the winner
    pub(crate) fn undo(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
        self.winner = None;
    }

    /// All empty positions, in ascending order
    pub fn free_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if any cell is still empty
    pub fn has_moves(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Number of empty cells
    pub fn remaining_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || !self.has_moves()
    }

    /// Outcome of a finished game, `None` while play continues
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner {
            Some(player) => Some(GameOutcome::Win(player)),
            None if !self.has_moves() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Side to move assuming X opened and the players alternated
    pub fn to_move(&self) -> Player {
        let x = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o = self.cells.iter().filter(|&&c| c == Cell::O).count();
        if x > o { Player::O } else { Player::X }
    }

    /// Cache key for the current configuration
    pub fn key(&self) -> BoardKey {
        BoardKey(self.cells)
    }

    /// Framed grid used for interactive play
    pub fn render(&self) -> String {
        let mut out = String::new();
        let border = "=".repeat(13);
        out.push_str(&border);
        out.push('\n');
        for row in self.cells.chunks(3) {
            let marks: Vec<String> = row
                .iter()
                .map(|&cell| match cell.to_player() {
                    Some(player) => player.to_string(),
                    None => " ".to_string(),
                })
                .collect();
            out.push_str(&format!("| {} |\n", marks.join(" | ")));
            out.push_str(&border);
            out.push('\n');
        }
        out
    }

    /// Framed grid of position numbers, shown before a game starts
    pub fn reference_grid() -> String {
        let mut out = String::new();
        let border = "=".repeat(13);
        out.push_str(&border);
        out.push('\n');
        for row in 0..3 {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                row * 3,
                row * 3 + 1,
                row * 3 + 2
            ));
            out.push_str(&border);
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
