//! Application service — run a wrapped command in an ECS task.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::{EcsApi, ProgressReporter, SessionPlugin};
use crate::application::services::task_lookup::find_latest_task_arn;
use crate::domain::config::SsmParentConfig;
use crate::domain::ecs::{select_container, ssm_target};
use crate::domain::error::{EcsError, ExecError};
use crate::domain::exec::{AwsContext, ExecRequest, PluginInvocation, remote_command};

/// Runs `request.command` through `ssm-parent` in the latest task of the
/// requested service and returns the exit status of `session-manager-plugin`.
///
/// The command is validated and the plugin is probed before any ECS call,
/// so a misconfigured host fails without opening a session.
///
/// # Errors
///
/// Returns an error if the plugin is missing, no task or container matches,
/// or any ECS call fails.
pub async fn exec_fargate(
    ecs: &impl EcsApi,
    plugin: &impl SessionPlugin,
    reporter: &impl ProgressReporter,
    aws: &AwsContext,
    ssm_parent: &SsmParentConfig,
    request: &ExecRequest,
) -> Result<ExitStatus> {
    let command = remote_command(ssm_parent, &request.command)?;

    if !plugin.is_installed().await {
        return Err(ExecError::PluginNotInstalled.into());
    }

    reporter.step(&format!(
        "finding task for service {} on cluster {}...",
        request.service, request.cluster
    ));
    let task_arn = find_latest_task_arn(ecs, &request.cluster, &request.service).await?;

    let task = ecs
        .describe_task(&request.cluster, &task_arn)
        .await
        .with_context(|| format!("describing task {task_arn}"))?;
    if !task.exec_enabled {
        return Err(EcsError::ExecDisabled(task_arn).into());
    }
    let container = select_container(&task, request.container.as_deref())?;
    let runtime_id = container
        .runtime_id
        .as_deref()
        .ok_or_else(|| EcsError::NoRuntimeId(container.name.clone()))?;

    reporter.step(&format!("starting session in container {}...", container.name));
    tracing::info!(
        task_arn = %task_arn,
        container = %container.name,
        command = %command,
        "executing command"
    );
    let session = ecs
        .execute_command(&request.cluster, &task_arn, &container.name, &command)
        .await?;

    let invocation = PluginInvocation {
        session,
        region: aws.region.clone(),
        profile: aws.profile.clone(),
        target: ssm_target(&request.cluster, &task_arn, runtime_id)?,
    };
    let status = plugin.start_session(&invocation).await?;

    // The plugin exits 0 whenever the session closes cleanly, whatever the
    // remote command returned.
    if status.success() {
        reporter.success(&format!("session closed in task {task_arn}"));
        tracing::info!("Command executed successfully");
    } else {
        tracing::warn!(code = ?status.code(), "session-manager-plugin exited with failure");
    }
    Ok(status)
}
