//! Then steps for task status lifecycle BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::domain::TaskStatus;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.status() != expected_status {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected_status.as_str(),
            task.status().as_str()
        ));
    }

    Ok(())
}

#[then("the creation and update timestamps match")]
fn timestamps_match(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.created_at() != task.updated_at() {
        return Err(eyre::eyre!(
            "expected matching timestamps, found created {} and updated {}",
            task.created_at(),
            task.updated_at()
        ));
    }

    Ok(())
}

#[then("the update timestamp is not before the creation timestamp")]
fn update_timestamp_not_before_creation(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.updated_at() < task.created_at() {
        return Err(eyre::eyre!(
            "update timestamp {} precedes creation timestamp {}",
            task.updated_at(),
            task.created_at()
        ));
    }

    Ok(())
}

#[then("the task collection is unchanged")]
fn task_collection_is_unchanged(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_update_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update outcome"))?;
    if outcome.is_some() {
        return Err(eyre::eyre!("expected the update to be a no-op"));
    }

    let before = world
        .listing_before_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing captured before the update"))?;
    let after = run_async(world.service.list_tasks())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;

    if *before != after {
        return Err(eyre::eyre!("task collection changed across a no-op update"));
    }

    Ok(())
}
