//! Configuration loaded from `cluster_status.toml`.
//!
//! Values missing from the file fall back to defaults. The environment
//! variables `CLUSTER_STATUS_ACCOUNTING_COMMAND` and `CLUSTER_STATUS_STATE_LINE`
//! take precedence over the file.

use serde::Deserialize;
use std::path::Path;

use crate::error::StatusError;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cluster_status.toml";

const ACCOUNTING_COMMAND_ENV: &str = "CLUSTER_STATUS_ACCOUNTING_COMMAND";
const STATE_LINE_ENV: &str = "CLUSTER_STATUS_STATE_LINE";

#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    /// Program queried for job accounting records.
    #[serde(default = "default_accounting_command")]
    pub accounting_command: String,

    /// Zero-based line of the accounting output that holds the state.
    #[serde(default = "default_state_line")]
    pub state_line: usize,
}

fn default_accounting_command() -> String {
    "sacct".to_string()
}

// Header, separator, then the job's own record.
fn default_state_line() -> usize {
    2
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            accounting_command: default_accounting_command(),
            state_line: default_state_line(),
        }
    }
}

impl StatusConfig {
    /// Loads the config file at `path`, using defaults if it does not exist,
    /// then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self, StatusError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(
            std::env::var(ACCOUNTING_COMMAND_ENV).ok(),
            std::env::var(STATE_LINE_ENV).ok(),
        )?;
        Ok(config)
    }

    /// Reads the config file at `path`, or defaults if it does not exist.
    fn from_file(path: &Path) -> Result<Self, StatusError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<StatusConfig>(&contents)?)
    }

    fn apply_overrides(
        &mut self,
        accounting_command: Option<String>,
        state_line: Option<String>,
    ) -> Result<(), StatusError> {
        if let Some(command) = accounting_command
            && !command.is_empty()
        {
            self.accounting_command = command;
        }

        if let Some(line) = state_line {
            self.state_line = line.trim().parse().map_err(|_| {
                StatusError::Config(format!("{STATE_LINE_ENV} must be a line number, got {line:?}"))
            })?;
        }

        Ok(())
    }
}
