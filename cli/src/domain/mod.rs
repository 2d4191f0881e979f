//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod ecs;
pub mod error;
pub mod exec;

pub use config::{ExecConfig, validate_config_key, validate_config_value};
pub use ecs::{ContainerInfo, ExecSession, TaskDescription};
pub use error::{ConfigError, EcsError, ExecError};
pub use exec::{AwsContext, ExecRequest, PluginInvocation};
