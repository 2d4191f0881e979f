//! ECS task and container types, plus the pure helpers that turn them into
//! an ECS Exec target.

use serde::Serialize;

use crate::domain::error::EcsError;

/// A container as reported by `DescribeTasks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub name: String,
    /// Docker runtime ID. Absent until the container has started.
    pub runtime_id: Option<String>,
}

/// The subset of a described task needed to open an exec session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription {
    pub task_arn: String,
    /// Whether the task was launched with `enableExecuteCommand`.
    pub exec_enabled: bool,
    pub containers: Vec<ContainerInfo>,
}

/// Session handed back by `ExecuteCommand`.
///
/// Serialized with the field names `session-manager-plugin` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecSession {
    pub session_id: String,
    pub stream_url: String,
    pub token_value: String,
}

/// Returns the resource ID at the end of an ECS ARN.
///
/// `arn:aws:ecs:eu-west-1:123456789012:task/main/0123abcd` → `0123abcd`.
/// A bare ID is returned unchanged.
///
/// # Errors
///
/// Returns [`EcsError::InvalidArn`] when the trailing segment is empty.
pub fn resource_id(arn: &str) -> Result<&str, EcsError> {
    match arn.rsplit('/').next() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(EcsError::InvalidArn(arn.to_string())),
    }
}

/// Returns the cluster name for either a plain name or a cluster ARN.
///
/// # Errors
///
/// Returns [`EcsError::InvalidArn`] when the name cannot be extracted.
pub fn cluster_name(cluster: &str) -> Result<&str, EcsError> {
    if cluster.starts_with("arn:") {
        resource_id(cluster)
    } else if cluster.is_empty() {
        Err(EcsError::InvalidArn(cluster.to_string()))
    } else {
        Ok(cluster)
    }
}

/// Builds the SSM target for an ECS Exec session:
/// `ecs:<cluster>_<task id>_<container runtime id>`.
///
/// # Errors
///
/// Returns [`EcsError::InvalidArn`] if the cluster or task ARN is malformed.
pub fn ssm_target(cluster: &str, task_arn: &str, runtime_id: &str) -> Result<String, EcsError> {
    let cluster = cluster_name(cluster)?;
    let task_id = resource_id(task_arn)?;
    Ok(format!("ecs:{cluster}_{task_id}_{runtime_id}"))
}

/// Picks the container to exec into.
///
/// With a name, that container must exist. Without one, the task must run
/// exactly one container.
///
/// # Errors
///
/// Returns an [`EcsError`] describing why no single container matched.
pub fn select_container<'a>(
    task: &'a TaskDescription,
    name: Option<&str>,
) -> Result<&'a ContainerInfo, EcsError> {
    let available = || {
        task.containers
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    match name {
        Some(name) => task
            .containers
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| EcsError::ContainerNotFound {
                name: name.to_string(),
                task: task.task_arn.clone(),
                available: available(),
            }),
        None => match task.containers.as_slice() {
            [] => Err(EcsError::NoContainers(task.task_arn.clone())),
            [only] => Ok(only),
            _ => Err(EcsError::AmbiguousContainer {
                task: task.task_arn.clone(),
                available: available(),
            }),
        },
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
