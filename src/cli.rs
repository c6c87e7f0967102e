//! Command-line interface based on clap.
//!
//! Only the last positional argument is read, as the job ID.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Report the workflow outcome (running, success, failed) of a cluster job.
#[derive(Debug, Parser)]
#[command(name = "cluster-status", version, about)]
pub struct Cli {
    /// Job ID assigned by the scheduler. Earlier arguments are ignored.
    #[arg(required = true, value_name = "JOBID")]
    pub args: Vec<String>,

    /// Path to a TOML config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enables debug logging on stderr.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// The job ID, taken from the last positional argument.
    pub fn job_id(&self) -> &str {
        self.args.last().map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_job_id() {
        let cli = Cli::parse_from(["cluster-status", "123456"]);
        assert_eq!(cli.job_id(), "123456");
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_reads_only_last_argument() {
        let cli = Cli::parse_from(["cluster-status", "ignored", "also-ignored", "98765"]);
        assert_eq!(cli.job_id(), "98765");
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from([
            "cluster-status",
            "--config",
            "/etc/cluster_status.toml",
            "-v",
            "42",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("/etc/cluster_status.toml"));
        assert_eq!(cli.job_id(), "42");
    }

    #[test]
    fn cli_requires_job_id() {
        assert!(Cli::try_parse_from(["cluster-status"]).is_err());
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
