//! Authorization decision snapshot polled from the service.

use serde::Deserialize;

/// A snapshot of the server-held decision record.
///
/// The record is written exactly once, by the human responder; this client
/// only reads it. The service omits `authorized` until a human has actioned
/// the request, so it defaults to `false` and is only meaningful once
/// `actioned` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AuthorizationDecision {
    /// True once a human has responded. Terminal.
    pub actioned: bool,
    /// Whether the deploy was approved. Meaningful only when actioned.
    #[serde(default)]
    pub authorized: bool,
}
