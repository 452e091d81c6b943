//! Strategy port - anything that can choose a move
//!
//! The turn loop does not care whether a move comes from a person at a
//! keyboard or from a search engine:
//! - Search strategies (minimax, alpha-beta)
//! - Interactive players reading from a terminal

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Strategy trait - unified interface for move suppliers
///
/// # Examples
///
/// ```
/// use oxo::{
///     ports::Strategy,
///     tictactoe::{Board, Player},
/// };
///
/// struct FirstFree;
///
/// impl Strategy for FirstFree {
///     fn select_move(&mut self, board: &Board, _player: Player) -> oxo::Result<usize> {
///         board
///             .free_positions()
///             .first()
///             .copied()
///             .ok_or(oxo::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mut strategy = FirstFree;
/// assert_eq!(strategy.select_move(&Board::new(), Player::X).unwrap(), 0);
/// ```
pub trait Strategy {
    /// Choose a position (0-8) for `player` on `board`.
    ///
    /// The board reflects the real game; implementations must not expect
    /// their own changes to it to be kept. The runner applies the returned
    /// move with [`Board::place`].
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Name used in logs and reports
    fn name(&self) -> &str;

    /// Whether a person supplies the moves.
    ///
    /// The runner only inserts its thinking delay for non-interactive
    /// strategies.
    fn is_interactive(&self) -> bool {
        false
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        (**self).select_move(board, player)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }
}
