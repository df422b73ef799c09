//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all system failure modes.
///
/// A denied or timed-out deploy is not a system failure and is therefore
/// not represented here; see [`crate::gate::Outcome`].
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// The initial authorization request could not be registered.
    Submission(String),
    /// A verification poll failed at the transport or protocol level.
    Poll(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Submission(msg) => write!(f, "submission: {msg}"),
            Self::Poll(msg) => write!(f, "poll: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}
