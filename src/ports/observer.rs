//! Observer port - watching a game without being part of it
//!
//! Rendering, logging and move recording are all observers, so the turn loop
//! stays free of any output format.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Player},
};

/// Observer trait for monitoring a game
///
/// # Event Sequence
///
/// 1. `on_game_start(board)` - once, before the first move
/// 2. `on_move(...)` - after every accepted move
/// 3. `on_game_end(outcome, board)` - once, when the game is decided
///
/// All methods default to doing nothing.
///
/// # Examples
///
/// ```
/// use oxo::{
///     ports::Observer,
///     tictactoe::{Board, GameOutcome},
/// };
///
/// #[derive(Default)]
/// struct GameCounter {
///     finished: usize,
/// }
///
/// impl Observer for GameCounter {
///     fn on_game_end(&mut self, _outcome: GameOutcome, _board: &Board) -> oxo::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called before the first move.
    fn on_game_start(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied.
    ///
    /// # Parameters
    ///
    /// * `step_num` - Move number within the game (0-based)
    /// * `player` - Who moved
    /// * `position` - Where the mark was placed
    /// * `board` - Board after the move
    fn on_move(
        &mut self,
        _step_num: usize,
        _player: Player,
        _position: usize,
        _board: &Board,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once the game is won or drawn.
    fn on_game_end(&mut self, _outcome: GameOutcome, _board: &Board) -> Result<()> {
        Ok(())
    }
}
