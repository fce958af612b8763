//! When steps for task status lifecycle BDD scenarios.

use super::world::{TaskStatusWorld, run_async, submit_pending_request};
use rstest_bdd_macros::when;
use taskboard::task::domain::{TaskId, TaskStatus};

#[when("the request is submitted")]
fn submit_request(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    submit_pending_request(world)
}

#[when(r#"the task status is changed to "{status}""#)]
fn change_task_status(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let parsed_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let outcome = run_async(world.service.update_status(task.id(), parsed_status))
        .map_err(|err| eyre::eyre!("status update failed: {err}"))?;
    if let Some(ref updated) = outcome {
        world.last_created_task = Some(updated.clone());
    }
    world.last_update_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the status of task {id:i64} is changed to "{status}""#)]
fn change_status_of_task_by_id(
    world: &mut TaskStatusWorld,
    id: i64,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task_id =
        TaskId::new(id).map_err(|err| eyre::eyre!("invalid task id in scenario: {err}"))?;

    let listing = run_async(world.service.list_tasks())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    world.listing_before_update = Some(listing);

    let outcome = run_async(world.service.update_status(task_id, parsed_status))
        .map_err(|err| eyre::eyre!("status update failed: {err}"))?;
    world.last_update_outcome = Some(outcome);
    Ok(())
}
