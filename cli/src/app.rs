//! Application context — unified state passed to every command handler.
//!
//! `AppContext` carries the output context, the loaded configuration and the
//! AWS flags. Adding a new cross-cutting concern requires only one field
//! change here — zero command signatures change.

use anyhow::{Context, Result};

use crate::application::services::config_service::load_config;
use crate::domain::config::ExecConfig;
use crate::infra::aws::{AwsSession, init_aws};
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// AWS session flags. `None` falls back to the config file, then the SDK.
#[derive(Default)]
pub struct AwsFlags {
    pub profile: Option<String>,
    pub region: Option<String>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// AWS session options.
    pub aws: AwsFlags,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to all
/// command handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration persistence.
    pub config_store: YamlConfigStore,
    /// Configuration loaded at startup.
    pub config: ExecConfig,
    aws: AwsFlags,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let config_store = YamlConfigStore;
        let config = load_config(&config_store)?;

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store,
            config,
            aws: flags.aws,
        })
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Profile from `--profile`/`AWS_PROFILE`, else `aws.profile`.
    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        self.aws
            .profile
            .as_deref()
            .or(self.config.aws.profile.as_deref())
    }

    /// Region from `--region`/`AWS_REGION`, else `aws.region`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.aws
            .region
            .as_deref()
            .or(self.config.aws.region.as_deref())
    }

    /// The process-wide AWS session for the resolved profile and region.
    ///
    /// # Errors
    ///
    /// Returns an error if the SDK configuration cannot be loaded.
    pub async fn aws_session(&self) -> Result<&'static AwsSession> {
        init_aws(self.profile(), self.region())
            .await
            .context("failed to initialize AWS session")
    }
}
