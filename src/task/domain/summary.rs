//! Dashboard summarisation and in-memory status filtering.

use super::{Task, TaskStatus};

/// Status counts over a task collection, as shown on a dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    /// Total number of tasks.
    pub total: usize,
    /// Tasks with status [`TaskStatus::New`].
    pub new: usize,
    /// Tasks with status [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Tasks with status [`TaskStatus::Done`].
    pub done: usize,
}

impl TaskSummary {
    /// Computes status counts over a full task listing.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut summary, task| {
            summary.total += 1;
            match task.status() {
                TaskStatus::New => summary.new += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Done => summary.done += 1,
            }
            summary
        })
    }
}

/// Filters a task listing to the given statuses, preserving order.
///
/// Filtering is the caller's responsibility and happens in memory over a
/// full listing; the store never filters server-side.
#[must_use]
pub fn filter_by_status<'a>(tasks: &'a [Task], statuses: &[TaskStatus]) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| statuses.contains(&task.status()))
        .collect()
}
