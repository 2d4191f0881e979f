//! Tests for `SessionManagerPlugin` over a recording `CommandRunner`.

#![allow(clippy::expect_used)]

use fargate_exec::application::ports::SessionPlugin;
use fargate_exec::domain::{ExecSession, PluginInvocation};
use fargate_exec::infra::session_plugin::SessionManagerPlugin;

use crate::mocks::RecordingRunner;

fn invocation() -> PluginInvocation {
    PluginInvocation {
        session: ExecSession {
            session_id: "sid".to_string(),
            stream_url: "wss://ssm".to_string(),
            token_value: "tok".to_string(),
        },
        region: "eu-west-1".to_string(),
        profile: String::new(),
        target: "ecs:main_0123abcd_rt".to_string(),
    }
}

#[tokio::test]
async fn test_is_installed_probes_version() {
    let runner = RecordingRunner::new(0);
    let log = runner.log();
    let plugin = SessionManagerPlugin::new(runner);

    assert!(plugin.is_installed().await);
    let runs = log.lock().expect("lock").clone();
    assert_eq!(runs, vec![vec!["session-manager-plugin", "--version"]]);
}

#[tokio::test]
async fn test_is_installed_false_when_spawn_fails() {
    let plugin = SessionManagerPlugin::new(RecordingRunner::not_found());
    assert!(!plugin.is_installed().await);
}

#[tokio::test]
async fn test_start_session_runs_plugin_with_start_session_args() {
    let runner = RecordingRunner::new(0);
    let log = runner.log();
    let plugin = SessionManagerPlugin::new(runner);

    let status = plugin
        .start_session(&invocation())
        .await
        .expect("session runs");

    assert!(status.success());
    let runs = log.lock().expect("lock").clone();
    assert_eq!(runs.len(), 1);
    let args = &runs[0];
    assert_eq!(args[0], "session-manager-plugin");
    assert!(args[1].contains(r#""SessionId":"sid""#));
    assert_eq!(args[2], "eu-west-1");
    assert_eq!(args[3], "StartSession");
    assert_eq!(args[4], "");
    assert_eq!(args[5], r#"{"Target":"ecs:main_0123abcd_rt"}"#);
    assert_eq!(args[6], "https://ecs.eu-west-1.amazonaws.com");
}

#[tokio::test]
async fn test_start_session_propagates_exit_code() {
    let plugin = SessionManagerPlugin::new(RecordingRunner::new(130));
    let status = plugin
        .start_session(&invocation())
        .await
        .expect("session runs");
    assert_eq!(status.code(), Some(130));
}

#[tokio::test]
async fn test_start_session_spawn_failure_names_plugin() {
    let plugin = SessionManagerPlugin::new(RecordingRunner::not_found());
    let err = plugin
        .start_session(&invocation())
        .await
        .expect_err("spawn fails");
    assert!(err.to_string().contains("session-manager-plugin"));
}
