//! Domain types and validators for fargate-exec configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigError, ExecError};

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "aws.profile",
    "aws.region",
    "target.cluster",
    "target.service",
    "target.container",
    "ssm_parent.entrypoint",
    "ssm_parent.config_path",
];

/// Wrapper binary baked into the application images.
pub const DEFAULT_SSM_PARENT_ENTRYPOINT: &str = "/usr/bin/ssm-parent";
/// Location of the wrapper's config inside the container.
pub const DEFAULT_SSM_PARENT_CONFIG: &str = "/app/.ssm-parent.yaml";
/// Service name used when neither flag nor config names one.
pub const DEFAULT_SERVICE: &str = "app";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.fargate-exec/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExecConfig {
    /// AWS session defaults.
    pub aws: AwsConfig,
    /// Default ECS target.
    pub target: TargetConfig,
    /// Remote wrapper command.
    pub ssm_parent: SsmParentConfig,
}

/// AWS session defaults. Unset fields fall through to the SDK default chain.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AwsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Default cluster, service and container to exec into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TargetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            cluster: None,
            service: DEFAULT_SERVICE.to_string(),
            container: None,
        }
    }
}

/// Location of the `ssm-parent` wrapper and its config inside the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SsmParentConfig {
    pub entrypoint: String,
    pub config_path: String,
}

impl Default for SsmParentConfig {
    fn default() -> Self {
        Self {
            entrypoint: DEFAULT_SSM_PARENT_ENTRYPOINT.to_string(),
            config_path: DEFAULT_SSM_PARENT_CONFIG.to_string(),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is empty, contains whitespace, or is not an
/// absolute path where one is required.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue {
            key: key.to_string(),
        }
        .into());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(key, value, "whitespace is not allowed"));
    }
    if key.starts_with("ssm_parent.") && !value.starts_with('/') {
        return Err(invalid(key, value, "must be an absolute path"));
    }
    Ok(())
}

fn invalid(key: &str, value: &str, reason: &str) -> anyhow::Error {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

// ── Accessors ────────────────────────────────────────────────────────────────

/// Sets `key` to `value` after validating both.
///
/// # Errors
///
/// Returns an error if the key is unknown or the value is invalid.
pub fn set_config_value(config: &mut ExecConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;

    let value = value.to_string();
    match key {
        "aws.profile" => config.aws.profile = Some(value),
        "aws.region" => config.aws.region = Some(value),
        "target.cluster" => config.target.cluster = Some(value),
        "target.service" => config.target.service = value,
        "target.container" => config.target.container = Some(value),
        "ssm_parent.entrypoint" => config.ssm_parent.entrypoint = value,
        "ssm_parent.config_path" => config.ssm_parent.config_path = value,
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

/// Returns every known key with its current value, in display order.
#[must_use]
pub fn config_entries(config: &ExecConfig) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("aws.profile", config.aws.profile.clone()),
        ("aws.region", config.aws.region.clone()),
        ("target.cluster", config.target.cluster.clone()),
        ("target.service", Some(config.target.service.clone())),
        ("target.container", config.target.container.clone()),
        (
            "ssm_parent.entrypoint",
            Some(config.ssm_parent.entrypoint.clone()),
        ),
        (
            "ssm_parent.config_path",
            Some(config.ssm_parent.config_path.clone()),
        ),
    ]
}

// ── Target resolution ────────────────────────────────────────────────────────

/// Cluster, service and container after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub cluster: String,
    pub service: String,
    pub container: Option<String>,
}

/// Merges command-line values over the configured defaults.
///
/// # Errors
///
/// Returns [`ExecError::MissingCluster`] if neither source names a cluster.
pub fn resolve_target(
    config: &ExecConfig,
    cluster: Option<&str>,
    service: Option<&str>,
    container: Option<&str>,
) -> Result<ResolvedTarget, ExecError> {
    let non_empty = |v: &&str| !v.is_empty();
    let cluster = cluster
        .filter(non_empty)
        .or(config.target.cluster.as_deref())
        .ok_or(ExecError::MissingCluster)?;
    let service = service
        .filter(non_empty)
        .unwrap_or(config.target.service.as_str());
    let container = container
        .filter(non_empty)
        .or(config.target.container.as_deref());

    Ok(ResolvedTarget {
        cluster: cluster.to_string(),
        service: service.to_string(),
        container: container.map(str::to_string),
    })
}

// ── Unit tests ───────────────────────────────────────────────────────────────
