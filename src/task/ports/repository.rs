//! Repository port for task persistence, lookup, and status updates.

use crate::task::domain::{NewTask, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations assign identifiers that are monotonically increasing
/// and never reused, and list tasks in identifier (insertion) order. Each
/// operation is atomic at the single-statement level only; concurrent
/// status writers are last-write-wins by design.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the underlying
    /// store rejects the insert.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Sets the status and update timestamp of the task matching `id`.
    ///
    /// Returns the updated task, or `None` when no task matches `id`; the
    /// missing-id case is a deliberate no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the underlying
    /// store fails.
    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks in identifier (insertion) order.
    ///
    /// Every call is a fresh full scan; no pagination or server-side
    /// filtering is offered.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A stored row no longer decodes into a domain task.
    #[error("corrupt task record {id}: {reason}")]
    CorruptRecord {
        /// Raw identifier of the offending row.
        id: i64,
        /// Decoding failure description.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
