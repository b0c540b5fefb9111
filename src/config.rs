//! Runtime configuration.
//!
//! Settings come from the environment and may be overridden on the command
//! line:
//!
//! - `TWENTY48_SEED` / `--seed`: seed for tile spawns (random when unset)
//! - `TWENTY48_LOG_PATH` / `--log-file`: append logs to this file (no logging when unset)
//! - `TWENTY48_LOG_LEVEL` / `--log-level`: `off`, `error`, `warn`, `info`, `debug`, `trace` (default `info`)
//!
//! Unparsable values fall back to their defaults.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::LevelFilter;
use simplelog::WriteLogger;

/// Command-line overrides.
#[derive(Debug, Default, Parser)]
#[command(name = "tui-2048", about = "Play 2048 in the terminal")]
pub struct Cli {
    /// Seed for tile spawns (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TWENTY48_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TWENTY48_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("TWENTY48_LOG_LEVEL")
            .and_then(|s| parse_level(&s))
            .unwrap_or(LevelFilter::Info);

        Self {
            seed,
            log_path,
            log_level,
        }
    }

    /// Apply command-line overrides on top of this config
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(path) = cli.log_file {
            self.log_path = Some(path);
        }
        if let Some(level) = cli.log_level.as_deref().and_then(parse_level) {
            self.log_level = level;
        }
        self
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Install a file logger if a log path is configured.
    ///
    /// The game owns the terminal in raw mode, so logs never go to stdout or stderr.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        WriteLogger::init(self.log_level, simplelog::Config::default(), file)
            .map_err(|e| anyhow!("installing logger: {}", e))
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    s.trim().parse().ok()
}
