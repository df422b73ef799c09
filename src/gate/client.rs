//! HTTP client for the authorization service.

use tokio::time::sleep;
use tracing::info;

use crate::config::GateConfig;
use crate::gate::{Outcome, PollSchedule};
use crate::models::{AuthorizationDecision, DeploymentRequest, VerificationQuery};
use crate::secret::Secret;
use crate::{AppError, Result};

/// Query discriminator for the submission call.
const SUBMIT_OPERATION: &str = "build_deploy_requested";
/// Query discriminator for the verification call.
const VERIFY_OPERATION: &str = "verify_authorization";

/// Client for one approval-gate run: submit once, then poll until a human
/// decides or the attempt budget runs out.
///
/// Each run is independent and stateless; nothing persists across
/// invocations.
pub struct GateClient {
    http: reqwest::Client,
    config: GateConfig,
    schedule: PollSchedule,
}

impl GateClient {
    /// Build a client whose polling schedule is derived from the configured
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the timeout cannot fund at least one
    /// poll or the HTTP client cannot be constructed.
    pub fn new(config: GateConfig) -> Result<Self> {
        let schedule = PollSchedule::from_timeout_minutes(config.timeout_minutes)?;
        Self::with_schedule(config, schedule)
    }

    /// Build a client with an explicit polling schedule.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be constructed.
    pub fn with_schedule(config: GateConfig, schedule: PollSchedule) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| AppError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self {
            http,
            config,
            schedule,
        })
    }

    /// Run the gate: submit the deployment request, then poll for the
    /// decision at a fixed rate.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Submission` if the request cannot be registered
    /// (fatal, no polls are issued) and `AppError::Poll` if any single
    /// verification call fails (fatal, the remaining budget is abandoned).
    pub async fn run(&self) -> Result<Outcome> {
        let request = DeploymentRequest::new(&self.config);
        self.submit(&request).await?;
        self.await_decision(request.id).await
    }

    /// Register the deployment request with the authorization service.
    async fn submit(&self, request: &DeploymentRequest) -> Result<()> {
        info!(
            requestor = %request.requestor,
            version = %request.version,
            build_type = %request.build_type,
            "submitting deploy authorization request"
        );
        self.http
            .post(self.config.server_url.clone())
            .query(&[("type", SUBMIT_OPERATION)])
            .json(request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                AppError::Submission(format!("authorization request was not accepted: {err}"))
            })?;
        Ok(())
    }

    /// Poll the authorization service until a decision lands or the attempt
    /// budget is exhausted. Sleeps before every attempt, so the first
    /// verification happens one interval after submission.
    async fn await_decision(&self, id: Secret) -> Result<Outcome> {
        let query = VerificationQuery { id };

        for attempt in 1..=self.schedule.max_attempts {
            sleep(self.schedule.interval).await;
            info!(
                attempt,
                max_attempts = self.schedule.max_attempts,
                "checking authorization status"
            );

            let decision = self.verify(&query).await?;
            if decision.actioned {
                return Ok(if decision.authorized {
                    Outcome::Authorized
                } else {
                    Outcome::Denied
                });
            }
        }

        Ok(Outcome::TimedOut {
            timeout_minutes: self.config.timeout_minutes,
        })
    }

    /// Issue a single verification call.
    async fn verify(&self, query: &VerificationQuery) -> Result<AuthorizationDecision> {
        let response = self
            .http
            .post(self.config.server_url.clone())
            .query(&[("type", VERIFY_OPERATION)])
            .json(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| AppError::Poll(format!("authorization verification failed: {err}")))?;

        response.json::<AuthorizationDecision>().await.map_err(|err| {
            AppError::Poll(format!(
                "authorization verification returned an unreadable decision: {err}"
            ))
        })
    }
}
