//! Play configuration shared by the game runner and the CLI

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for running a game.
///
/// Delays only ever happen in the turn loop, between searches.
///
/// # Examples
///
/// ```
/// use oxo::config::PlayConfig;
///
/// let config = PlayConfig::default()
///     .with_think_delay_ms(0)
///     .with_show_moves(false);
/// assert_eq!(config.move_delay_ms, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Pause before a non-interactive strategy picks its move
    pub think_delay_ms: u64,
    /// Pause after every accepted move
    pub move_delay_ms: u64,
    /// Print the board after each move
    pub show_moves: bool,
    /// Print the position guide before the first move
    pub show_reference: bool,
}

impl PlayConfig {
    /// No delays and no board output
    pub fn instant() -> Self {
        Self {
            think_delay_ms: 0,
            move_delay_ms: 0,
            show_moves: false,
            show_reference: false,
        }
    }

    /// Load a configuration from a JSON file; missing fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create config {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn with_think_delay_ms(mut self, millis: u64) -> Self {
        self.think_delay_ms = millis;
        self
    }

    pub fn with_move_delay_ms(mut self, millis: u64) -> Self {
        self.move_delay_ms = millis;
        self
    }

    pub fn with_show_moves(mut self, show: bool) -> Self {
        self.show_moves = show;
        self
    }

    pub fn with_show_reference(mut self, show: bool) -> Self {
        self.show_reference = show;
        self
    }

    /// Drop both delays, keeping the display settings
    pub fn without_delays(self) -> Self {
        self.with_think_delay_ms(0).with_move_delay_ms(0)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: 600,
            move_delay_ms: 300,
            show_moves: true,
            show_reference: true,
        }
    }
}
