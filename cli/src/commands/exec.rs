//! `fargate-exec exec` — run a command through `ssm-parent` in a Fargate task.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::exec::exec_fargate;
use crate::commands::TargetArgs;
use crate::domain::config::resolve_target;
use crate::domain::exec::{ExecRequest, join_command};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::session_plugin::SessionManagerPlugin;
use crate::output::TerminalReporter;

/// Arguments for the exec command.
#[derive(Args)]
#[command(trailing_var_arg = true)]
pub struct ExecArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Container to exec into (default: target.container, else the task's only container)
    #[arg(long)]
    pub container: Option<String>,

    /// Command and arguments to run under ssm-parent
    #[arg(required = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Run a command inside the latest task of the service.
///
/// Stdin, stdout, and stderr are attached to the remote session. The exit
/// status of `session-manager-plugin` becomes the exit code of this process.
///
/// # Errors
///
/// Returns an error if the target cannot be resolved or the session fails.
pub async fn run(app: &AppContext, args: &ExecArgs) -> Result<ExitCode> {
    let target = resolve_target(
        &app.config,
        args.target.cluster.as_deref(),
        args.target.service.as_deref(),
        args.container.as_deref(),
    )?;
    let request = ExecRequest {
        cluster: target.cluster,
        service: target.service,
        container: target.container,
        command: join_command(&args.command),
    };

    let session = app.aws_session().await?;
    let plugin = SessionManagerPlugin::new(TokioCommandRunner::default());
    let reporter = TerminalReporter::new(&app.output);

    let status = exec_fargate(
        &session.ecs(),
        &plugin,
        &reporter,
        &session.context(),
        &app.config.ssm_parent,
        &request,
    )
    .await
    .context("failed to execute command")?;

    let code = status.code().unwrap_or(1);
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
