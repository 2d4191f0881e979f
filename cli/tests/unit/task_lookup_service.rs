//! Tests for the `task_lookup` application service.

#![allow(clippy::expect_used)]

use fargate_exec::application::services::task_lookup::{find_latest_task_arn, list_tasks};
use fargate_exec::domain::EcsError;

use crate::helpers::{CLUSTER, OTHER_TASK_ARN, SERVICE, TASK_ARN};
use crate::mocks::MockEcs;

#[tokio::test]
async fn test_find_latest_task_arn_returns_first() {
    let mut ecs = MockEcs::single_container();
    ecs.task_arns = vec![TASK_ARN.to_string(), OTHER_TASK_ARN.to_string()];

    let arn = find_latest_task_arn(&ecs, CLUSTER, SERVICE)
        .await
        .expect("task found");

    assert_eq!(arn, TASK_ARN);
    assert_eq!(ecs.calls(), vec!["list_tasks main app".to_string()]);
}

#[tokio::test]
async fn test_find_latest_task_arn_no_tasks_is_typed_error() {
    let ecs = MockEcs::no_tasks();

    let err = find_latest_task_arn(&ecs, CLUSTER, "worker")
        .await
        .expect_err("no tasks");

    assert_eq!(
        err.downcast_ref::<EcsError>(),
        Some(&EcsError::NoTasks {
            service: "worker".to_string(),
            cluster: CLUSTER.to_string(),
        })
    );
}

#[tokio::test]
async fn test_find_latest_task_arn_wraps_list_failure() {
    let mut ecs = MockEcs::single_container();
    ecs.list_fails = true;

    let err = find_latest_task_arn(&ecs, CLUSTER, SERVICE)
        .await
        .expect_err("list fails");

    assert_eq!(err.to_string(), "error listing tasks");
    assert!(format!("{err:#}").contains("AccessDeniedException"));
}

#[tokio::test]
async fn test_list_tasks_empty_is_ok() {
    let ecs = MockEcs::no_tasks();
    let arns = list_tasks(&ecs, CLUSTER, SERVICE).await.expect("listed");
    assert!(arns.is_empty());
}

#[tokio::test]
async fn test_list_tasks_returns_all() {
    let mut ecs = MockEcs::single_container();
    ecs.task_arns = vec![TASK_ARN.to_string(), OTHER_TASK_ARN.to_string()];
    let arns = list_tasks(&ecs, CLUSTER, SERVICE).await.expect("listed");
    assert_eq!(arns.len(), 2);
}
