//! Approval gate client: submit a deployment request, poll for the human
//! decision at a fixed rate, and resolve a terminal outcome.

pub mod client;
pub mod schedule;

pub use client::GateClient;
pub use schedule::{PollSchedule, POLL_INTERVAL_SECONDS};

/// Terminal classification of a gate run.
///
/// Denied and timed-out runs are deployment-level failures, not system
/// faults; system faults travel as [`crate::AppError`] instead. Both reach
/// the caller through the same failure signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A human approved the deploy; the pipeline proceeds.
    Authorized,
    /// A human denied the deploy.
    Denied,
    /// No human responded within the attempt budget.
    TimedOut {
        /// The configured wait budget, echoed into the failure message.
        timeout_minutes: u64,
    },
}

impl Outcome {
    /// The failure reason to report to the pipeline, if any.
    #[must_use]
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Authorized => None,
            Self::Denied => Some("The deploy has been denied.".to_owned()),
            Self::TimedOut { timeout_minutes } => Some(format!(
                "No answer provided to authorize the deploy after {timeout_minutes} minutes. \
                 This deploy is not authorized to continue..."
            )),
        }
    }
}
