//! In-memory repository for task storage tests and ephemeral embedding.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Mirrors the durable store's contract: identifiers are monotonically
/// increasing and never reused (the counter does not rewind, even though
/// tasks are never deleted), and listing follows identifier order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    next_id: i64,
    tasks: BTreeMap<TaskId, Task>,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            next_id: 1,
            tasks: BTreeMap::new(),
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps lock poisoning into a repository persistence error.
fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;

        let id = TaskId::new(state.next_id).map_err(TaskRepositoryError::persistence)?;
        state.next_id += 1;

        let stored = task.clone().into_task(id);
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(poisoned)?;

        let Some(task) = state.tasks.get_mut(&id) else {
            return Ok(None);
        };
        task.set_status(status, updated_at);
        Ok(Some(task.clone()))
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }
}
