//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::{ExecConfig, ExecSession, PluginInvocation, TaskDescription};

// ── ECS Port ──────────────────────────────────────────────────────────────────

/// The three ECS API calls an exec needs.
#[allow(async_fn_in_trait)]
pub trait EcsApi {
    /// ARNs of the tasks with desired status `RUNNING` for `service`.
    async fn list_task_arns(&self, cluster: &str, service: &str) -> Result<Vec<String>>;
    /// Describe a single task and its containers.
    async fn describe_task(&self, cluster: &str, task_arn: &str) -> Result<TaskDescription>;
    /// Open an interactive ECS Exec session for `command` in `container`.
    async fn execute_command(
        &self,
        cluster: &str,
        task_arn: &str,
        container: &str,
        command: &str,
    ) -> Result<ExecSession>;
}

// ── Session Plugin Port ───────────────────────────────────────────────────────

/// Attaches the local terminal to an ECS Exec session.
#[allow(async_fn_in_trait)]
pub trait SessionPlugin {
    /// Returns `true` when the plugin binary can be run.
    async fn is_installed(&self) -> bool;
    /// Run the plugin with inherited stdio until the remote command exits.
    async fn start_session(&self, invocation: &PluginInvocation) -> Result<ExitStatus>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
    /// Run a program with inherited stdio and return only its exit status.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts persisted configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when absent.
    fn load(&self) -> Result<ExecConfig>;
    /// Persist the configuration.
    fn save(&self, config: &ExecConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
