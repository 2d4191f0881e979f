//! Tests for the `exec` application service.
//!
//! Verifies that `exec_fargate()` resolves the task and container through the
//! injected `EcsApi`, wraps the command with `ssm-parent`, and hands the
//! session to the injected `SessionPlugin`.

#![allow(clippy::expect_used)]

use fargate_exec::application::services::exec::exec_fargate;
use fargate_exec::domain::config::SsmParentConfig;
use fargate_exec::domain::{AwsContext, EcsError, ExecError, ExecRequest};

use crate::helpers::{CLUSTER, SERVICE, TASK_ARN};
use crate::mocks::{CapturingReporter, MockEcs, MockPlugin};

fn aws() -> AwsContext {
    AwsContext {
        region: "eu-west-1".to_string(),
        profile: "staging".to_string(),
    }
}

fn request(container: Option<&str>, command: &str) -> ExecRequest {
    ExecRequest {
        cluster: CLUSTER.to_string(),
        service: SERVICE.to_string(),
        container: container.map(str::to_string),
        command: command.to_string(),
    }
}

#[tokio::test]
async fn test_exec_wraps_command_with_ssm_parent() {
    let ecs = MockEcs::single_container();
    let plugin = MockPlugin::exiting_with(0);
    let reporter = CapturingReporter::default();

    let status = exec_fargate(
        &ecs,
        &plugin,
        &reporter,
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "bin/rails console"),
    )
    .await
    .expect("exec succeeds");

    assert!(status.success());
    let executed = ecs.executed();
    assert_eq!(executed.len(), 1);
    let (task, container, command) = &executed[0];
    assert_eq!(task, TASK_ARN);
    assert_eq!(container, "app");
    assert_eq!(
        command,
        "/usr/bin/ssm-parent -c /app/.ssm-parent.yaml run -- bin/rails console"
    );
}

#[tokio::test]
async fn test_exec_passes_session_target_region_and_profile_to_plugin() {
    let ecs = MockEcs::single_container();
    let plugin = MockPlugin::exiting_with(0);

    exec_fargate(
        &ecs,
        &plugin,
        &CapturingReporter::default(),
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "sh"),
    )
    .await
    .expect("exec succeeds");

    let invocations = plugin.invocations();
    assert_eq!(invocations.len(), 1);
    let inv = &invocations[0];
    assert_eq!(inv.target, "ecs:main_0123abcd_rt-app");
    assert_eq!(inv.region, "eu-west-1");
    assert_eq!(inv.profile, "staging");
    assert_eq!(inv.session.session_id, "ecs-execute-command-0a1b");
}

#[tokio::test]
async fn test_exec_returns_plugin_exit_status_without_success_report() {
    let ecs = MockEcs::single_container();
    let plugin = MockPlugin::exiting_with(3);
    let reporter = CapturingReporter::default();

    let status = exec_fargate(
        &ecs,
        &plugin,
        &reporter,
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "false"),
    )
    .await
    .expect("session ran");

    assert_eq!(status.code(), Some(3));
    assert!(reporter.successes().is_empty());
}

#[tokio::test]
async fn test_exec_selects_named_container() {
    let ecs = MockEcs::with_containers(&[("app", Some("rt-app")), ("worker", Some("rt-w"))]);
    let plugin = MockPlugin::exiting_with(0);

    exec_fargate(
        &ecs,
        &plugin,
        &CapturingReporter::default(),
        &aws(),
        &SsmParentConfig::default(),
        &request(Some("worker"), "sh"),
    )
    .await
    .expect("exec succeeds");

    assert_eq!(ecs.executed()[0].1, "worker");
    assert_eq!(plugin.invocations()[0].target, "ecs:main_0123abcd_rt-w");
}

#[tokio::test]
async fn test_exec_ambiguous_container_fails_before_execute_command() {
    let ecs = MockEcs::with_containers(&[("app", Some("rt-app")), ("worker", Some("rt-w"))]);
    let plugin = MockPlugin::exiting_with(0);

    let err = exec_fargate(
        &ecs,
        &plugin,
        &CapturingReporter::default(),
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "sh"),
    )
    .await
    .expect_err("ambiguous");

    assert!(matches!(
        err.downcast_ref::<EcsError>(),
        Some(EcsError::AmbiguousContainer { .. })
    ));
    assert!(ecs.executed().is_empty());
    assert!(plugin.invocations().is_empty());
}

#[tokio::test]
async fn test_exec_container_without_runtime_id_fails() {
    let ecs = MockEcs::with_containers(&[("app", None)]);
    let plugin = MockPlugin::exiting_with(0);

    let err = exec_fargate(
        &ecs,
        &plugin,
        &CapturingReporter::default(),
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "sh"),
    )
    .await
    .expect_err("no runtime id");

    assert_eq!(
        err.downcast_ref::<EcsError>(),
        Some(&EcsError::NoRuntimeId("app".to_string()))
    );
}

#[tokio::test]
async fn test_exec_task_without_exec_enabled_fails() {
    let mut ecs = MockEcs::single_container();
    ecs.task.exec_enabled = false;
    let plugin = MockPlugin::exiting_with(0);

    let err = exec_fargate(
        &ecs,
        &plugin,
        &CapturingReporter::default(),
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "sh"),
    )
    .await
    .expect_err("exec disabled");

    assert_eq!(
        err.downcast_ref::<EcsError>(),
        Some(&EcsError::ExecDisabled(TASK_ARN.to_string()))
    );
    assert!(ecs.executed().is_empty());
}

#[tokio::test]
async fn test_exec_missing_plugin_fails_without_ecs_calls() {
    let ecs = MockEcs::single_container();
    let plugin = MockPlugin::missing();

    let err = exec_fargate(
        &ecs,
        &plugin,
        &CapturingReporter::default(),
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "sh"),
    )
    .await
    .expect_err("plugin missing");

    assert_eq!(
        err.downcast_ref::<ExecError>(),
        Some(&ExecError::PluginNotInstalled)
    );
    assert!(ecs.calls().is_empty());
}

#[tokio::test]
async fn test_exec_blank_command_fails_without_ecs_calls() {
    let ecs = MockEcs::single_container();
    let plugin = MockPlugin::exiting_with(0);

    let err = exec_fargate(
        &ecs,
        &plugin,
        &CapturingReporter::default(),
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "  "),
    )
    .await
    .expect_err("blank command");

    assert_eq!(err.downcast_ref::<ExecError>(), Some(&ExecError::EmptyCommand));
    assert!(ecs.calls().is_empty());
}

#[tokio::test]
async fn test_exec_no_tasks_reports_service_and_cluster() {
    let ecs = MockEcs::no_tasks();
    let plugin = MockPlugin::exiting_with(0);

    let err = exec_fargate(
        &ecs,
        &plugin,
        &CapturingReporter::default(),
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "sh"),
    )
    .await
    .expect_err("no tasks");

    assert_eq!(
        err.to_string(),
        "no tasks found for service app on cluster main"
    );
}

#[tokio::test]
async fn test_exec_reports_progress_steps() {
    let ecs = MockEcs::single_container();
    let plugin = MockPlugin::exiting_with(0);
    let reporter = CapturingReporter::default();

    exec_fargate(
        &ecs,
        &plugin,
        &reporter,
        &aws(),
        &SsmParentConfig::default(),
        &request(None, "sh"),
    )
    .await
    .expect("exec succeeds");

    let steps = reporter.steps();
    assert_eq!(steps.len(), 2);
    assert!(steps[0].contains("service app on cluster main"));
    assert!(steps[1].contains("container app"));
    assert_eq!(
        reporter.successes(),
        vec![format!("session closed in task {TASK_ARN}")]
    );
}
