use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::cli::Cli;
use crate::song::DurationPolicy;

pub const DEFAULT_LIBRARY_FILE: &str = "library.txt";

/// Runtime settings: defaults, then the optional JSON file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub library_file: PathBuf,
    pub duration_policy: DurationPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            library_file: PathBuf::from(DEFAULT_LIBRARY_FILE),
            duration_policy: DurationPolicy::Reject,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse JSON configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&contents)
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Config::default(),
        };

        if let Some(path) = &cli.library_path {
            config.library_file = path.clone();
        }
        if cli.allow_negative_duration {
            config.duration_policy = DurationPolicy::Allow;
        }

        debug!("Using {:?}", config);
        Ok(config)
    }
}
