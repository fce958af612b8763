//! Domain model for team task tracking.
//!
//! The task domain models task creation from validated request data, the
//! fixed status lifecycle, and dashboard summarisation while keeping all
//! infrastructure concerns outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod summary;
mod task;

pub use draft::TaskDraft;
pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use summary::{TaskSummary, filter_by_status};
pub use task::{NewTask, PersistedTaskData, Priority, TIMESTAMP_FORMAT, Task, TaskStatus};
