//! Subcommands of the `oxo` binary

use anyhow::{Result, anyhow};

use crate::{
    config::PlayConfig,
    pipeline::{ConsoleObserver, GameRunner, TracingObserver},
    tictactoe::Player,
};

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod watch;

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "p1" => Ok(Player::X),
        "o" | "0" | "second" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Runner with the observers every interactive command uses
pub(crate) fn build_runner(config: &PlayConfig) -> GameRunner {
    let mut runner = GameRunner::new(config.clone()).with_observer(Box::new(TracingObserver));
    if config.show_moves {
        runner = runner.with_observer(Box::new(ConsoleObserver::new(config.show_reference)));
    }
    runner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("X", "--mark").unwrap(), Player::X);
        assert_eq!(parse_player_token(" o ", "--mark").unwrap(), Player::O);
        assert_eq!(parse_player_token("second", "--mark").unwrap(), Player::O);

        let err = parse_player_token("z", "--mark").unwrap_err();
        assert!(err.to_string().contains("--mark"));
    }
}
