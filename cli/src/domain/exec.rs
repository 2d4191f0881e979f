//! Remote command composition and `session-manager-plugin` arguments.
//!
//! Pure functions only — no I/O, no async.

use anyhow::{Context, Result};

use crate::domain::config::SsmParentConfig;
use crate::domain::ecs::ExecSession;
use crate::domain::error::ExecError;

/// Name of the AWS binary that carries the SSM session.
pub const SESSION_MANAGER_PLUGIN: &str = "session-manager-plugin";

/// What to run, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRequest {
    pub cluster: String,
    pub service: String,
    /// Container name; `None` selects the task's only container.
    pub container: Option<String>,
    /// Command passed to `ssm-parent run --`.
    pub command: String,
}

/// Region and profile of the loaded AWS session, forwarded to the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsContext {
    pub region: String,
    /// Profile name, empty for the default chain.
    pub profile: String,
}

/// Composes the command line executed in the container:
/// `<entrypoint> -c <config_path> run -- <command>`.
///
/// # Errors
///
/// Returns [`ExecError::EmptyCommand`] if `command` is blank.
pub fn remote_command(ssm_parent: &SsmParentConfig, command: &str) -> Result<String, ExecError> {
    let command = command.trim();
    if command.is_empty() {
        return Err(ExecError::EmptyCommand);
    }
    Ok(format!(
        "{} -c {} run -- {command}",
        ssm_parent.entrypoint, ssm_parent.config_path
    ))
}

/// Joins CLI words into a single command string.
#[must_use]
pub fn join_command(words: &[String]) -> String {
    words.join(" ")
}

/// ECS API endpoint the plugin reports the session against.
#[must_use]
pub fn ecs_endpoint(region: &str) -> String {
    if region.starts_with("cn-") {
        format!("https://ecs.{region}.amazonaws.com.cn")
    } else {
        format!("https://ecs.{region}.amazonaws.com")
    }
}

/// Everything `session-manager-plugin` needs to attach to a session.
#[derive(Debug, Clone)]
pub struct PluginInvocation {
    pub session: ExecSession,
    pub region: String,
    /// Profile name, empty for the default chain.
    pub profile: String,
    /// SSM target, see [`crate::domain::ecs::ssm_target`].
    pub target: String,
}

impl PluginInvocation {
    /// Positional arguments in the order the plugin parses them:
    /// `<session> <region> StartSession <profile> <params> <endpoint>`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn args(&self) -> Result<Vec<String>> {
        let session =
            serde_json::to_string(&self.session).context("cannot serialize exec session")?;
        let params = serde_json::to_string(&serde_json::json!({ "Target": self.target }))
            .context("cannot serialize session parameters")?;
        Ok(vec![
            session,
            self.region.clone(),
            "StartSession".to_string(),
            self.profile.clone(),
            params,
            ecs_endpoint(&self.region),
        ])
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
