//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::config::{ExecConfig, config_entries};
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("fargate-exec {version}");
    }

    /// Print the bare ARN so the output can be piped.
    pub fn render_task_arn(&self, task_arn: &str) {
        println!("{task_arn}");
    }

    /// Render the running tasks of a service, one ARN per line.
    pub fn render_tasks(&self, cluster: &str, service: &str, arns: &[String]) {
        if arns.is_empty() {
            self.ctx
                .warn(&format!("No running tasks for service {service} on cluster {cluster}"));
            return;
        }
        for arn in arns {
            println!("{arn}");
        }
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &ExecConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        for (key, value) in config_entries(config) {
            let value = value.unwrap_or_else(|| "(not set)".to_string());
            println!("  {:<24} {value}", format!("{key}:"));
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_ENV, "AWS_PROFILE", "AWS_REGION", "NO_COLOR"] {
            println!(
                "    {:<22} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}
