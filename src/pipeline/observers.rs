//! Observer adapters for watching games
//!
//! Observers keep the turn loop independent of any output format.

use std::io::{self, Stdout, Write};

use tracing::info;

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Player},
};

/// Console observer - draws the board after every move
pub struct ConsoleObserver<W = Stdout> {
    out: W,
    show_reference: bool,
}

impl ConsoleObserver<Stdout> {
    /// Create an observer printing to standard output
    pub fn new(show_reference: bool) -> Self {
        Self::with_writer(io::stdout(), show_reference)
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Create an observer printing to any writer
    pub fn with_writer(out: W, show_reference: bool) -> Self {
        Self {
            out,
            show_reference,
        }
    }

    /// Consume the observer and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_game_start(&mut self, _board: &Board) -> Result<()> {
        if self.show_reference {
            writeln!(self.out, "\nPosition Guide:")?;
            write!(self.out, "{}", Board::reference_grid())?;
        }
        Ok(())
    }

    fn on_move(
        &mut self,
        _step_num: usize,
        player: Player,
        position: usize,
        board: &Board,
    ) -> Result<()> {
        writeln!(self.out, "\n{player} claims position {position}")?;
        writeln!(self.out)?;
        write!(self.out, "{}", board.render())?;
        Ok(())
    }

    fn on_game_end(&mut self, outcome: GameOutcome, _board: &Board) -> Result<()> {
        match outcome {
            GameOutcome::Win(player) => writeln!(self.out, "\n{player} triumphs!")?,
            GameOutcome::Draw => writeln!(self.out, "\nThe battle tied")?,
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Tracing observer - emits one structured event per game event
#[derive(Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        info!(board = %board.key(), "game started");
        Ok(())
    }

    fn on_move(
        &mut self,
        step_num: usize,
        player: Player,
        position: usize,
        board: &Board,
    ) -> Result<()> {
        info!(
            step = step_num,
            %player,
            position,
            board = %board.key(),
            "move applied"
        );
        Ok(())
    }

    fn on_game_end(&mut self, outcome: GameOutcome, board: &Board) -> Result<()> {
        info!(%outcome, board = %board.key(), "game finished");
        Ok(())
    }
}
