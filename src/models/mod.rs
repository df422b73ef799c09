//! Wire records exchanged with the authorization service.

pub mod decision;
pub mod request;

pub use decision::AuthorizationDecision;
pub use request::{DeploymentRequest, VerificationQuery};
