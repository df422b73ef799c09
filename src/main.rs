#![forbid(unsafe_code)]

//! `deploy-gate` — manual approval gate for deployment pipelines.
//!
//! Submits a deployment authorization request to the authorization service,
//! then blocks the pipeline until a human approves, denies, or the
//! configured timeout elapses. Exits zero only when the deploy is
//! authorized.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use deploy_gate::config::{GateConfig, GateInputs};
use deploy_gate::gate::{GateClient, Outcome};
use deploy_gate::{AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "deploy-gate", about = "Manual approval gate for deployment pipelines", long_about = None)]
struct Cli {
    /// Base endpoint of the authorization service.
    #[arg(long, env = "DEPLOY_GATE_SERVER_URL")]
    authorization_server_url: String,

    /// Identity of the pipeline invoker.
    #[arg(long, env = "DEPLOY_GATE_REQUESTOR")]
    requestor: String,

    /// Artifact or version identifier being deployed.
    #[arg(long, env = "DEPLOY_GATE_VERSION")]
    version: String,

    /// Source revision being deployed.
    #[arg(long, env = "DEPLOY_GATE_LATEST_COMMIT_HASH")]
    latest_commit_hash: String,

    /// Classification of the build.
    #[arg(long, env = "DEPLOY_GATE_BUILD_TYPE")]
    build_type: String,

    /// JSON-encoded list of target environments.
    #[arg(long, env = "DEPLOY_GATE_DEPLOYMENT_ENVIRONMENTS")]
    deployment_environments: String,

    /// JSON-encoded list of pre-approved environments.
    #[arg(long, env = "DEPLOY_GATE_WHITELISTED_ENVIRONMENTS")]
    whitelisted_environments: String,

    /// Minutes to wait for a human decision.
    #[arg(long, env = "DEPLOY_GATE_TIMEOUT")]
    timeout: u64,

    /// IANA zone name used to render the submission timestamp.
    #[arg(long, env = "DEPLOY_GATE_TIMEZONE")]
    timezone: String,

    /// Notification channel the approver is alerted on. Secret.
    #[arg(long, env = "DEPLOY_GATE_NOTIFICATION_CHANNEL_ID", hide_env_values = true)]
    notification_channel_id: String,

    /// Auth token for the notification channel. Secret.
    #[arg(long, env = "DEPLOY_GATE_NOTIFICATION_CREDENTIAL", hide_env_values = true)]
    notification_credential: String,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(args.log_format) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to build tokio runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args)) {
        Ok(outcome) => match outcome.failure_reason() {
            None => {
                info!("The deploy is authorized to continue.");
                ExitCode::SUCCESS
            }
            Some(reason) => {
                error!("{reason}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<Outcome> {
    let config = GateConfig::from_inputs(GateInputs {
        authorization_server_url: args.authorization_server_url,
        requestor: args.requestor,
        version: args.version,
        latest_commit_hash: args.latest_commit_hash,
        build_type: args.build_type,
        deployment_environments: args.deployment_environments,
        whitelisted_environments: args.whitelisted_environments,
        timeout: args.timeout,
        timezone: args.timezone,
        notification_channel_id: args.notification_channel_id,
        notification_credential: args.notification_credential,
    })?;

    info!(
        requestor = %config.requestor,
        version = %config.version,
        timeout_minutes = config.timeout_minutes,
        "deploy gate starting"
    );

    let client = GateClient::new(config)?;
    client.run().await
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
