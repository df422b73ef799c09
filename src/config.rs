//! Gate configuration parsing and validation.

use std::collections::BTreeSet;

use chrono_tz::Tz;
use reqwest::Url;

use crate::gate::PollSchedule;
use crate::secret::Secret;
use crate::{AppError, Result};

/// Raw invocation inputs exactly as the invoking environment provides them.
///
/// Field names mirror the invocation surface: every value arrives as a flag
/// or environment variable from the pipeline runner, with the environment
/// lists JSON-encoded the way the authorization service expects them.
#[derive(Debug, Clone)]
pub struct GateInputs {
    /// Base endpoint for both submission and verification calls.
    pub authorization_server_url: String,
    /// Identity of the pipeline invoker.
    pub requestor: String,
    /// Artifact or version identifier being deployed.
    pub version: String,
    /// Source revision being deployed.
    pub latest_commit_hash: String,
    /// Classification of the build.
    pub build_type: String,
    /// JSON-encoded list of target environments.
    pub deployment_environments: String,
    /// JSON-encoded list of pre-approved environments.
    pub whitelisted_environments: String,
    /// Total time budget, in minutes, to wait for a human decision.
    pub timeout: u64,
    /// IANA zone name used to render the submission timestamp.
    pub timezone: String,
    /// Destination for the human alert. Secret.
    pub notification_channel_id: String,
    /// Auth token for the notification channel. Secret.
    pub notification_credential: String,
}

/// Validated gate configuration.
///
/// Construction through [`GateConfig::from_inputs`] guarantees that every
/// configuration error surfaces before any network activity, and that the
/// notification credentials are wrapped in [`Secret`] on entry.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Base endpoint of the authorization service.
    pub server_url: Url,
    /// Identity of the pipeline invoker, passed through verbatim.
    pub requestor: String,
    /// Artifact or version identifier, passed through verbatim.
    pub version: String,
    /// Source revision, passed through verbatim.
    pub commit_hash: String,
    /// Build classification, passed through verbatim.
    pub build_type: String,
    /// Target environments for this deploy.
    pub deployment_environments: BTreeSet<String>,
    /// Environments pre-approved on the service side.
    pub whitelisted_environments: BTreeSet<String>,
    /// Decision wait budget in minutes.
    pub timeout_minutes: u64,
    /// Zone used to render the human-readable submission timestamp.
    pub timezone: Tz,
    /// Destination for the human alert.
    pub notification_channel_id: Secret,
    /// Auth token for the notification channel.
    pub notification_credential: Secret,
}

impl GateConfig {
    /// Validate raw invocation inputs into a typed configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the server URL does not parse, either
    /// environment list is not a JSON list of strings, the timezone is not a
    /// recognized zone name, or the timeout cannot fund at least one poll.
    pub fn from_inputs(inputs: GateInputs) -> Result<Self> {
        let server_url = Url::parse(&inputs.authorization_server_url).map_err(|err| {
            AppError::Config(format!("authorization-server-url is not a valid URL: {err}"))
        })?;

        let deployment_environments =
            parse_environment_list("deployment-environments", &inputs.deployment_environments)?;
        let whitelisted_environments =
            parse_environment_list("whitelisted-environments", &inputs.whitelisted_environments)?;

        let timezone: Tz = inputs.timezone.parse().map_err(|_| {
            AppError::Config(format!(
                "timezone '{}' is not a recognized IANA zone name",
                inputs.timezone
            ))
        })?;

        // A zero-poll budget is rejected before any network call.
        PollSchedule::from_timeout_minutes(inputs.timeout)?;

        Ok(Self {
            server_url,
            requestor: inputs.requestor,
            version: inputs.version,
            commit_hash: inputs.latest_commit_hash,
            build_type: inputs.build_type,
            deployment_environments,
            whitelisted_environments,
            timeout_minutes: inputs.timeout,
            timezone,
            notification_channel_id: Secret::new(inputs.notification_channel_id),
            notification_credential: Secret::new(inputs.notification_credential),
        })
    }
}

/// Parse a JSON-encoded list input into a set of environment names.
fn parse_environment_list(input_name: &str, raw: &str) -> Result<BTreeSet<String>> {
    serde_json::from_str(raw).map_err(|err| {
        AppError::Config(format!("{input_name} is not a JSON list of strings: {err}"))
    })
}
