//! Redacted-by-construction wrapper for credential values.

use std::fmt::{Debug, Display, Formatter};

use serde::{Serialize, Serializer};

const REDACTION_MARKER: &str = "[redacted]";

/// A credential value whose `Debug` and `Display` renderings are redacted.
///
/// The deploy identifier and the notification credentials are credentials:
/// possessing them allows answering the authorization request. Wrapping them
/// here guarantees they cannot leak through logging or error formatting at
/// any call site. The raw value leaves the process only through [`Serialize`],
/// which is reserved for wire bodies sent to the authorization service.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a credential value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read the wrapped value. Must not be routed into logs or messages.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret({REDACTION_MARKER})")
    }
}

impl Display for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTION_MARKER)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
