//! Turn loop alternating two strategies

use std::{thread, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    Result,
    config::PlayConfig,
    ports::{Observer, Strategy},
    tictactoe::{Board, GameOutcome, Move, Player},
};

/// A finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    /// Moves in the order they were played
    pub moves: Vec<Move>,
    /// Board at the end of the game
    pub board: Board,
}

/// Plays one game between two strategies, X moving first
pub struct GameRunner {
    config: PlayConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl GameRunner {
    /// Create a runner with the given configuration
    pub fn new(config: PlayConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    /// Play a full game.
    ///
    /// Each accepted move is applied with [`Board::place`]. A strategy that
    /// answers with an occupied or off-board cell ends the game with an
    /// error rather than being asked again.
    pub fn play(
        &mut self,
        x_strategy: &mut dyn Strategy,
        o_strategy: &mut dyn Strategy,
    ) -> Result<GameRecord> {
        info!(x = x_strategy.name(), o = o_strategy.name(), "starting game");

        let mut board = Board::new();
        let mut moves = Vec::new();
        for observer in &mut self.observers {
            observer.on_game_start(&board)?;
        }

        let mut current = Player::X;
        while board.has_moves() {
            let strategy: &mut dyn Strategy = match current {
                Player::X => &mut *x_strategy,
                Player::O => &mut *o_strategy,
            };

            if !strategy.is_interactive() {
                pause(self.config.think_delay());
            }

            let position = strategy.select_move(&board, current)?;
            if let Err(err) = board.try_place(position, current) {
                warn!(strategy = strategy.name(), %current, position, "rejected move");
                return Err(err);
            }

            let step_num = moves.len();
            moves.push(Move {
                position,
                player: current,
            });
            for observer in &mut self.observers {
                observer.on_move(step_num, current, position, &board)?;
            }

            if board.winner().is_some() {
                break;
            }
            current = current.opponent();
            pause(self.config.move_delay());
        }

        let outcome = match board.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        };
        for observer in &mut self.observers {
            observer.on_game_end(outcome, &board)?;
        }
        info!(%outcome, moves = moves.len(), "game over");

        Ok(GameRecord {
            outcome,
            moves,
            board,
        })
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
