//! Job accounting queries and their translation into an [`Outcome`].
//!
//! The [`AccountingQuery`] trait is the seam between the translator and the
//! scheduler; [`Sacct`] is the implementation that shells out to the
//! accounting command.

use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::config::StatusConfig;
use crate::error::StatusError;
use crate::state::{Outcome, SchedulerState};

/// Source of raw accounting output for a job.
pub trait AccountingQuery {
    /// Returns the standard output of the accounting query for `job_id`.
    fn query(&self, job_id: &str) -> Result<String, StatusError>;
}

/// Runs `<program> -j <jobid> --format=State`.
pub struct Sacct {
    program: String,
}

impl Sacct {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &StatusConfig) -> Self {
        Self::new(config.accounting_command.clone())
    }
}

impl AccountingQuery for Sacct {
    fn query(&self, job_id: &str) -> Result<String, StatusError> {
        debug!("running {} -j {job_id} --format=State", self.program);
        let output = Command::new(&self.program)
            .args(["-j", job_id, "--format=State"])
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| StatusError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // A failing exit status still leaves parseable output in some cases.
        if !output.status.success() {
            warn!("{} exited with {} for job {job_id}", self.program, output.status);
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Picks the state field out of the accounting output.
///
/// The output is split on `\n` and line `line` (zero-based) is taken, with
/// surrounding whitespace and `+` markers removed.
pub fn extract_state(output: &str, line: usize) -> Result<&str, StatusError> {
    let raw = output
        .split('\n')
        .nth(line)
        .ok_or_else(|| StatusError::MissingStateLine {
            line,
            found: output.split('\n').count(),
        })?;
    Ok(raw.trim().trim_matches('+'))
}

/// Queries the accounting source for `job_id` and maps the reported state.
pub fn translate(
    query: &impl AccountingQuery,
    job_id: &str,
    config: &StatusConfig,
) -> Result<Outcome, StatusError> {
    let output = query.query(job_id)?;
    let state: SchedulerState = extract_state(&output, config.state_line)?.parse()?;
    let outcome = state.outcome();
    debug!("job {job_id}: state {state:?} -> {outcome}");
    Ok(outcome)
}
