//! `SQLite` integration tests for task lifecycle operations.

use super::helpers::{SqliteStore, create_task, store};
use rstest::rstest;
use taskboard::task::{
    domain::{Priority, TaskId, TaskStatus},
    services::CreateTaskRequest,
};

fn task_id(value: i64) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_created_task_gets_id_one_with_new_status(store: SqliteStore) {
    let created = store
        .service
        .create_task(
            CreateTaskRequest::new("Fix login bug", Priority::High)
                .with_description("")
                .with_owner("Ana"),
        )
        .await
        .expect("task creation should succeed");

    let tasks = store
        .service
        .list_tasks()
        .await
        .expect("listing should succeed");

    assert_eq!(tasks.len(), 1);
    assert_eq!(created.id(), task_id(1));
    assert_eq!(created.status(), TaskStatus::New);
    assert_eq!(created.priority(), Priority::High);
    assert_eq!(created.owner(), Some("Ana"));
    assert_eq!(created.description(), None);
    assert_eq!(created.created_at(), created.updated_at());
    assert_eq!(tasks.first(), Some(&created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_the_first_task_leaves_the_second_new(store: SqliteStore) {
    let first = create_task(&store.service, "Fix login bug", Priority::High).await;
    let second = create_task(&store.service, "Prepare rollout plan", Priority::Medium).await;

    store
        .service
        .update_status(first.id(), TaskStatus::Done)
        .await
        .expect("status update should succeed")
        .expect("task should exist");

    let tasks = store
        .service
        .list_tasks()
        .await
        .expect("listing should succeed");
    let completed = tasks
        .iter()
        .find(|task| task.id() == first.id())
        .expect("first task should be listed");
    let untouched = tasks
        .iter()
        .find(|task| task.id() == second.id())
        .expect("second task should be listed");

    assert_eq!(completed.status(), TaskStatus::Done);
    assert!(completed.updated_at() >= completed.created_at());
    assert_eq!(untouched.status(), TaskStatus::New);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_id_update_is_a_silent_no_op(store: SqliteStore) {
    create_task(&store.service, "Fix login bug", Priority::High).await;
    let before = store
        .service
        .list_tasks()
        .await
        .expect("listing should succeed");

    let outcome = store
        .service
        .update_status(task_id(99), TaskStatus::Done)
        .await
        .expect("status update should succeed");

    let after = store
        .service
        .list_tasks()
        .await
        .expect("listing should succeed");
    assert!(outcome.is_none());
    assert_eq!(before, after);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_strictly_increasing(store: SqliteStore) {
    let mut previous = 0;
    for title in ["First", "Second", "Third"] {
        let created = create_task(&store.service, title, Priority::Low).await;
        assert!(created.id().value() > previous);
        previous = created.id().value();
    }

    let tasks = store
        .service
        .list_tasks()
        .await
        .expect("listing should succeed");
    let ids: Vec<i64> = tasks.iter().map(|task| task.id().value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn redundant_status_write_still_refreshes_timestamp(store: SqliteStore) {
    let created = create_task(&store.service, "Fix login bug", Priority::High).await;

    let rewritten = store
        .service
        .update_status(created.id(), TaskStatus::New)
        .await
        .expect("status update should succeed")
        .expect("task should exist");

    assert_eq!(rewritten.status(), TaskStatus::New);
    assert!(rewritten.updated_at() >= created.updated_at());
}
