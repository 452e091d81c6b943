//! Options shared by every command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::PlayConfig;

/// Global flags accepted before or after the subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Load play settings from a JSON file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip thinking and move delays
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Log search details to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOptions {
    /// Build the play configuration these flags describe
    pub fn play_config(&self) -> Result<PlayConfig> {
        let config = match &self.config {
            Some(path) => PlayConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => PlayConfig::default(),
        };

        Ok(if self.no_delay {
            config.without_delays()
        } else {
            config
        })
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "oxo=debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delay_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("play.json");
        std::fs::write(&path, r#"{ "think_delay_ms": 900, "show_reference": false }"#).unwrap();

        let options = GlobalOptions {
            config: Some(path),
            no_delay: true,
            verbose: false,
        };
        let config = options.play_config().unwrap();
        assert_eq!(config.think_delay_ms, 0);
        assert_eq!(config.move_delay_ms, 0);
        assert!(!config.show_reference);
    }

    #[test]
    fn test_missing_config_has_context() {
        let options = GlobalOptions {
            config: Some(PathBuf::from("/no/such/play.json")),
            ..GlobalOptions::default()
        };
        let err = options.play_config().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config"));
    }

    #[test]
    fn test_log_filter() {
        let mut options = GlobalOptions::default();
        assert_eq!(options.default_log_filter(), "warn");
        options.verbose = true;
        assert_eq!(options.default_log_filter(), "oxo=debug");
    }
}
