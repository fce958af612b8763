//! Given steps for task status lifecycle BDD scenarios.

use super::world::{TaskStatusWorld, submit_pending_request};
use rstest_bdd_macros::given;
use taskboard::task::{domain::Priority, services::CreateTaskRequest};

#[given(r#"a task request titled "{title}" with priority "{priority}" assigned to "{owner}""#)]
fn task_request(
    world: &mut TaskStatusWorld,
    title: String,
    priority: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let parsed_priority = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    world.pending_request = Some(CreateTaskRequest::new(title, parsed_priority).with_owner(owner));
    Ok(())
}

#[given("the request has been submitted")]
fn request_has_been_submitted(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    submit_pending_request(world)
}
