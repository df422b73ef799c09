//! Polling budget derived from the caller-supplied timeout.

use std::time::Duration;

use crate::{AppError, Result};

/// Seconds between verification polls. Fixed: the interval bounds how
/// quickly a decision is noticed and how many polls a timeout budget
/// allows, so it is part of the observable contract.
pub const POLL_INTERVAL_SECONDS: u64 = 5;

/// A bounded, fixed-rate polling schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    /// Hard cap on verification attempts.
    pub max_attempts: u64,
    /// Delay before each attempt.
    pub interval: Duration,
}

impl PollSchedule {
    /// Derive the attempt budget from a timeout in minutes.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the timeout is zero or too small to
    /// fund a single poll.
    pub fn from_timeout_minutes(timeout_minutes: u64) -> Result<Self> {
        if timeout_minutes == 0 {
            return Err(AppError::Config(
                "timeout must be a positive number of minutes".to_owned(),
            ));
        }

        let max_attempts = timeout_minutes * 60 / POLL_INTERVAL_SECONDS;
        if max_attempts == 0 {
            return Err(AppError::Config(format!(
                "a timeout of {timeout_minutes} minute(s) does not allow a single \
                 authorization poll"
            )));
        }

        Ok(Self {
            max_attempts,
            interval: Duration::from_secs(POLL_INTERVAL_SECONDS),
        })
    }
}
