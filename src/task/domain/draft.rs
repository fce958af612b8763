//! Validated task request data used for task creation.

use super::{Priority, TaskDomainError};

/// Task request data as received from a presentation layer.
///
/// A draft carries everything a caller supplies when creating a task. The
/// title is validated to be non-empty; description and owner normalise
/// blank values to `None`. The store assigns the identifier, status, and
/// timestamps when the draft is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    owner: Option<String>,
    priority: Priority,
}

impl TaskDraft {
    /// Creates a draft with required title and priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>, priority: Priority) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            description: None,
            owner: None,
            priority,
        })
    }

    /// Sets the task description. Blank values clear the field.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the task owner. Blank values clear the field.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        let value = owner.into();
        let normalized = value.trim();
        self.owner = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Decomposes the draft into its owned parts.
    #[must_use]
    pub(crate) fn into_parts(self) -> (String, Option<String>, Option<String>, Priority) {
        (self.title, self.description, self.owner, self.priority)
    }
}
