//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── ECS errors ────────────────────────────────────────────────────────────────

/// Errors raised while resolving a task and container to exec into.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EcsError {
    #[error("no tasks found for service {service} on cluster {cluster}")]
    NoTasks { service: String, cluster: String },

    #[error("task {0} was not returned by DescribeTasks")]
    TaskNotFound(String),

    #[error("container '{name}' not found in task {task}. Available: {available}")]
    ContainerNotFound {
        name: String,
        task: String,
        available: String,
    },

    #[error("task {task} runs several containers ({available}); pick one with --container")]
    AmbiguousContainer { task: String, available: String },

    #[error("task {0} was started without ECS Exec enabled (enableExecuteCommand)")]
    ExecDisabled(String),

    #[error("task {0} has no containers")]
    NoContainers(String),

    #[error("container '{0}' has no runtime ID yet (is the task still starting?)")]
    NoRuntimeId(String),

    #[error("invalid ARN: {0}")]
    InvalidArn(String),
}

// ── Exec errors ───────────────────────────────────────────────────────────────

/// Errors related to preparing an ECS Exec session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    #[error("no command given")]
    EmptyCommand,

    #[error("no cluster given. Pass --cluster or run: fargate-exec config set target.cluster <name>")]
    MissingCluster,

    #[error("no AWS region configured for profile '{0}'. Pass --region or set one in ~/.aws/config")]
    MissingRegion(String),

    #[error("session-manager-plugin is not installed or not in PATH")]
    PluginNotInstalled,

    #[error("ExecuteCommand returned no session")]
    NoSession,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: value must not be empty")]
    EmptyValue { key: String },

    #[error("Invalid value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
