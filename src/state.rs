//! Scheduler job states and the outcome each one maps to.
//!
//! [`SchedulerState`] covers the state names the accounting command reports;
//! [`Outcome`] is the coarse answer the workflow manager expects.

use std::fmt;
use std::str::FromStr;

use crate::error::StatusError;

/// The three answers the workflow manager understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Success,
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Running => write!(f, "running"),
            Outcome::Success => write!(f, "success"),
            Outcome::Failed => write!(f, "failed"),
        }
    }
}

/// A job state as reported by the accounting command.
///
/// `Blank` stands for an empty state field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Pending,
    Running,
    Suspended,
    Cancelled,
    Completing,
    Completed,
    Configuring,
    Failed,
    Timeout,
    Preempted,
    NodeFail,
    Revoked,
    SpecialExit,
    Blank,
}

impl SchedulerState {
    pub const ALL: [SchedulerState; 14] = [
        SchedulerState::Pending,
        SchedulerState::Running,
        SchedulerState::Suspended,
        SchedulerState::Cancelled,
        SchedulerState::Completing,
        SchedulerState::Completed,
        SchedulerState::Configuring,
        SchedulerState::Failed,
        SchedulerState::Timeout,
        SchedulerState::Preempted,
        SchedulerState::NodeFail,
        SchedulerState::Revoked,
        SchedulerState::SpecialExit,
        SchedulerState::Blank,
    ];

    /// The name the accounting command uses for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulerState::Pending => "PENDING",
            SchedulerState::Running => "RUNNING",
            SchedulerState::Suspended => "SUSPENDED",
            SchedulerState::Cancelled => "CANCELLED",
            SchedulerState::Completing => "COMPLETING",
            SchedulerState::Completed => "COMPLETED",
            SchedulerState::Configuring => "CONFIGURING",
            SchedulerState::Failed => "FAILED",
            SchedulerState::Timeout => "TIMEOUT",
            SchedulerState::Preempted => "PREEMPTED",
            SchedulerState::NodeFail => "NODE_FAIL",
            SchedulerState::Revoked => "REVOKED",
            SchedulerState::SpecialExit => "SPECIAL_EXIT",
            SchedulerState::Blank => "",
        }
    }

    /// Map the scheduler state onto the workflow manager's outcome.
    ///
    /// A job that is queued, executing, or wrapping up counts as `Running`.
    /// A blank state counts as `Success`.
    pub fn outcome(&self) -> Outcome {
        match self {
            SchedulerState::Pending
            | SchedulerState::Running
            | SchedulerState::Suspended
            | SchedulerState::Completing
            | SchedulerState::Configuring => Outcome::Running,
            SchedulerState::Completed | SchedulerState::Blank => Outcome::Success,
            SchedulerState::Cancelled
            | SchedulerState::Failed
            | SchedulerState::Timeout
            | SchedulerState::Preempted
            | SchedulerState::NodeFail
            | SchedulerState::Revoked
            | SchedulerState::SpecialExit => Outcome::Failed,
        }
    }
}

impl fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulerState {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchedulerState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| StatusError::UnknownState(s.to_string()))
    }
}
