//! AWS session and ECS client.
//!
//! The session is loaded once per process and shared by every command.

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types::DesiredStatus;
use tokio::sync::OnceCell;

use crate::application::ports::EcsApi;
use crate::domain::error::{EcsError, ExecError};
use crate::domain::{AwsContext, ContainerInfo, ExecSession, TaskDescription};

static SESSION: OnceCell<AwsSession> = OnceCell::const_new();

/// ECS client built from the loaded SDK configuration.
#[derive(Debug)]
pub struct AwsSession {
    client: aws_sdk_ecs::Client,
    profile: String,
    region: String,
}

impl AwsSession {
    async fn load(profile: Option<&str>, region: Option<&str>) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let config = loader.load().await;

        let profile = profile.unwrap_or_default().to_string();
        let region = config
            .region()
            .map(ToString::to_string)
            .ok_or_else(|| {
                let label = if profile.is_empty() { "default" } else { profile.as_str() };
                ExecError::MissingRegion(label.to_string())
            })
            .context("failed to load configuration")?;

        tracing::debug!(profile = %profile, region = %region, "loaded AWS configuration");
        Ok(Self {
            client: aws_sdk_ecs::Client::new(&config),
            profile,
            region,
        })
    }

    /// An ECS API handle backed by this session's client.
    #[must_use]
    pub fn ecs(&self) -> EcsClient {
        EcsClient {
            client: self.client.clone(),
        }
    }

    /// Region and profile to hand to `session-manager-plugin`.
    #[must_use]
    pub fn context(&self) -> AwsContext {
        AwsContext {
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// Returns the process-wide AWS session, loading it on first use.
///
/// Later calls return the memoized session regardless of their arguments;
/// a differing profile is logged and ignored.
///
/// # Errors
///
/// Returns an error if no region can be resolved for the profile.
pub async fn init_aws(profile: Option<&str>, region: Option<&str>) -> Result<&'static AwsSession> {
    let profile = profile.filter(|p| !p.is_empty());
    let session = SESSION
        .get_or_try_init(|| AwsSession::load(profile, region))
        .await?;
    if let Some(requested) = profile
        && requested != session.profile
    {
        tracing::warn!(
            requested,
            active = %session.profile,
            "AWS session already initialized; ignoring profile"
        );
    }
    Ok(session)
}

fn sdk_error(err: impl std::error::Error) -> anyhow::Error {
    anyhow::anyhow!("{}", DisplayErrorContext(err))
}

/// `EcsApi` over the AWS SDK.
#[derive(Debug, Clone)]
pub struct EcsClient {
    client: aws_sdk_ecs::Client,
}

impl EcsApi for EcsClient {
    async fn list_task_arns(&self, cluster: &str, service: &str) -> Result<Vec<String>> {
        let output = self
            .client
            .list_tasks()
            .cluster(cluster)
            .service_name(service)
            .desired_status(DesiredStatus::Running)
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(output.task_arns().to_vec())
    }

    async fn describe_task(&self, cluster: &str, task_arn: &str) -> Result<TaskDescription> {
        let output = self
            .client
            .describe_tasks()
            .cluster(cluster)
            .tasks(task_arn)
            .send()
            .await
            .map_err(sdk_error)?;

        let task = output
            .tasks()
            .first()
            .ok_or_else(|| EcsError::TaskNotFound(task_arn.to_string()))?;

        Ok(TaskDescription {
            task_arn: task.task_arn().unwrap_or(task_arn).to_string(),
            exec_enabled: task.enable_execute_command(),
            containers: task
                .containers()
                .iter()
                .map(|c| ContainerInfo {
                    name: c.name().unwrap_or_default().to_string(),
                    runtime_id: c.runtime_id().map(str::to_string),
                })
                .collect(),
        })
    }

    async fn execute_command(
        &self,
        cluster: &str,
        task_arn: &str,
        container: &str,
        command: &str,
    ) -> Result<ExecSession> {
        let output = self
            .client
            .execute_command()
            .cluster(cluster)
            .task(task_arn)
            .container(container)
            .command(command)
            .interactive(true)
            .send()
            .await
            .map_err(sdk_error)?;

        let session = output.session().ok_or(ExecError::NoSession)?;
        match (
            session.session_id(),
            session.stream_url(),
            session.token_value(),
        ) {
            (Some(id), Some(url), Some(token)) => Ok(ExecSession {
                session_id: id.to_string(),
                stream_url: url.to_string(),
                token_value: token.to_string(),
            }),
            _ => Err(ExecError::NoSession.into()),
        }
    }
}
