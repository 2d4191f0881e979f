//! JSON output helpers.
//!
//! Provides the machine-readable renderer and the error-object formatter used
//! by all `--json` code paths when a command fails.

use anyhow::{Context, Result};

use crate::domain::config::ExecConfig;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders command results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &serde_json::Value) -> Result<()> {
        let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&serde_json::json!({ "version": version }))
    }

    /// Render a single task ARN.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_task_arn(&self, task_arn: &str) -> Result<()> {
        Self::print(&serde_json::json!({ "task_arn": task_arn }))
    }

    /// Render the running tasks of a service.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_tasks(&self, cluster: &str, service: &str, arns: &[String]) -> Result<()> {
        Self::print(&serde_json::json!({
            "cluster": cluster,
            "service": service,
            "task_arns": arns,
        }))
    }

    /// Render the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &ExecConfig, path: &std::path::Path) -> Result<()> {
        let config = serde_json::to_value(config).context("JSON serialization failed")?;
        Self::print(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }
}
