//! Command implementations

pub mod config;
pub mod exec;
pub mod task;
pub mod version;

use clap::Args;

/// Cluster and service selection shared by task-oriented commands.
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// ECS cluster name or ARN (default: target.cluster)
    #[arg(long, short = 'c')]
    pub cluster: Option<String>,

    /// ECS service name (default: target.service, then "app")
    #[arg(long, short = 's')]
    pub service: Option<String>,
}
