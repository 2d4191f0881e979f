//! Application service — locate the task to exec into.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};

use crate::application::ports::EcsApi;
use crate::domain::error::EcsError;

/// Returns the first running task ARN of `service` on `cluster`.
///
/// # Errors
///
/// Returns an error if the task listing fails, or [`EcsError::NoTasks`] if
/// the service has no running tasks.
pub async fn find_latest_task_arn(
    ecs: &impl EcsApi,
    cluster: &str,
    service: &str,
) -> Result<String> {
    let arns = list_tasks(ecs, cluster, service).await?;
    let Some(first) = arns.into_iter().next() else {
        return Err(EcsError::NoTasks {
            service: service.to_string(),
            cluster: cluster.to_string(),
        }
        .into());
    };
    tracing::debug!(task_arn = %first, cluster, service, "selected task");
    Ok(first)
}

/// Returns every running task ARN of `service` on `cluster`, possibly none.
///
/// # Errors
///
/// Returns an error if the task listing fails.
pub async fn list_tasks(ecs: &impl EcsApi, cluster: &str, service: &str) -> Result<Vec<String>> {
    ecs.list_task_arns(cluster, service)
        .await
        .context("error listing tasks")
}
