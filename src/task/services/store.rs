//! Service layer exposing the consumer-facing task store operations.

use crate::task::{
    domain::{NewTask, Priority, Task, TaskDomainError, TaskDraft, TaskId, TaskStatus, TaskSummary},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    owner: Option<String>,
    priority: Priority,
}

impl CreateTaskRequest {
    /// Creates a request with required title and priority.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            description: None,
            owner: None,
            priority,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task owner.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store service operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store orchestration service.
///
/// One instance wraps one repository and is injected into whatever
/// presentation layer needs it; construct it once at startup rather than
/// holding ambient global state.
#[derive(Clone)]
pub struct TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task store service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task and returns it with its store-assigned
    /// identifier.
    ///
    /// The task starts in [`TaskStatus::New`] with creation and update
    /// timestamps set to the same clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the title is empty after
    /// trimming, or [`TaskStoreError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskStoreResult<Task> {
        let mut draft = TaskDraft::new(request.title, request.priority)?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(owner) = request.owner {
            draft = draft.with_owner(owner);
        }

        let new_task = NewTask::from_draft(draft, &*self.clock);
        let created = self.repository.insert(&new_task).await?;
        tracing::info!(id = %created.id(), "created task");
        Ok(created)
    }

    /// Sets the status of the task matching `id`, refreshing its update
    /// timestamp.
    ///
    /// Returns `Ok(None)` when no task matches `id`: the missing-id case
    /// is a deliberate no-op and leaves the collection unchanged. Writing
    /// the current status again is allowed and still refreshes
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persistence fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskStoreResult<Option<Task>> {
        let now = self.clock.utc();
        let updated = self.repository.update_status(id, status, now).await?;
        match &updated {
            Some(task) => {
                tracing::debug!(id = %task.id(), status = %task.status(), "updated task status");
            }
            None => tracing::debug!(id = %id, "status update for unknown task ignored"),
        }
        Ok(updated)
    }

    /// Returns all tasks in identifier (insertion) order.
    ///
    /// Each call is a fresh full scan; status filtering is the caller's
    /// responsibility, in memory, over the full result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persistence fails.
    pub async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persistence fails.
    pub async fn find_task(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Computes dashboard status counts over the full task listing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persistence fails.
    pub async fn summary(&self) -> TaskStoreResult<TaskSummary> {
        let tasks = self.repository.list_all().await?;
        Ok(TaskSummary::from_tasks(&tasks))
    }
}
