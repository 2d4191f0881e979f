//! `fargate-exec task` / `fargate-exec tasks` — inspect running tasks.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::task_lookup::{find_latest_task_arn, list_tasks};
use crate::commands::TargetArgs;
use crate::domain::config::resolve_target;

/// Print the ARN the exec command would target.
///
/// # Errors
///
/// Returns an error if the service has no running tasks or the call fails.
pub async fn run_latest(app: &AppContext, args: &TargetArgs) -> Result<ExitCode> {
    let target = resolve_target(
        &app.config,
        args.cluster.as_deref(),
        args.service.as_deref(),
        None,
    )?;
    let session = app.aws_session().await?;
    let arn = find_latest_task_arn(&session.ecs(), &target.cluster, &target.service).await?;
    app.renderer().render_task_arn(&arn)?;
    Ok(ExitCode::SUCCESS)
}

/// Print every running task ARN of the service.
///
/// # Errors
///
/// Returns an error if the task listing fails.
pub async fn run_list(app: &AppContext, args: &TargetArgs) -> Result<ExitCode> {
    let target = resolve_target(
        &app.config,
        args.cluster.as_deref(),
        args.service.as_deref(),
        None,
    )?;
    let session = app.aws_session().await?;
    let arns = list_tasks(&session.ecs(), &target.cluster, &target.service).await?;
    app.renderer()
        .render_tasks(&target.cluster, &target.service, &arns)?;
    Ok(ExitCode::SUCCESS)
}
