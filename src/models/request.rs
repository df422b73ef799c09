//! Deployment authorization request and verification query bodies.

use std::collections::BTreeSet;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::config::GateConfig;
use crate::secret::Secret;

/// Timestamp shape shown to the approver, rendered in the caller's zone.
const SUBMITTED_DATE_FORMAT: &str = "%Y-%m-%d, %H:%M:%S";

/// A deployment authorization request, submitted once per invocation and
/// immutable afterwards.
///
/// The `id` is generated fresh for every invocation and is a credential:
/// whoever holds it can answer the authorization request, so it lives in a
/// [`Secret`] and only ever leaves the process inside this wire body.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRequest {
    /// Unique, high-entropy deploy identifier.
    pub id: Secret,
    /// Submission time rendered in the caller's timezone.
    pub submitted_date: String,
    /// Identity of the pipeline invoker.
    pub requestor: String,
    /// Artifact or version identifier.
    pub version: String,
    /// Source revision being deployed.
    pub commit_hash: String,
    /// Target environments for this deploy.
    pub deployment_environments: BTreeSet<String>,
    /// Environments pre-approved on the service side.
    pub whitelisted_environments: BTreeSet<String>,
    /// Classification of the build.
    pub build_type: String,
    /// Destination for the human alert.
    pub notification_channel_id: Secret,
    /// Auth token for the notification channel.
    pub notification_credential: Secret,
}

impl DeploymentRequest {
    /// Construct a request with a fresh identifier and the current time.
    #[must_use]
    pub fn new(config: &GateConfig) -> Self {
        let submitted = Utc::now().with_timezone(&config.timezone);
        Self {
            id: Secret::new(Uuid::new_v4().to_string()),
            submitted_date: submitted.format(SUBMITTED_DATE_FORMAT).to_string(),
            requestor: config.requestor.clone(),
            version: config.version.clone(),
            commit_hash: config.commit_hash.clone(),
            deployment_environments: config.deployment_environments.clone(),
            whitelisted_environments: config.whitelisted_environments.clone(),
            build_type: config.build_type.clone(),
            notification_channel_id: config.notification_channel_id.clone(),
            notification_credential: config.notification_credential.clone(),
        }
    }
}

/// Body of a verification poll, referencing a request by its identifier.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationQuery {
    /// Identifier of the deployment request being verified.
    pub id: Secret,
}
