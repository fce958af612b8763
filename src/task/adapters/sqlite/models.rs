//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Optional task owner.
    pub owner: Option<String>,
    /// Priority as canonical text.
    pub priority: String,
    /// Lifecycle status as canonical text.
    pub status: String,
    /// Creation timestamp as `YYYY-MM-DD HH:MM:SS` text.
    pub created_at: String,
    /// Last update timestamp as `YYYY-MM-DD HH:MM:SS` text.
    pub updated_at: String,
}

/// Insert model for task records; the store assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Optional task owner.
    pub owner: Option<String>,
    /// Priority as canonical text.
    pub priority: String,
    /// Lifecycle status as canonical text.
    pub status: String,
    /// Creation timestamp as `YYYY-MM-DD HH:MM:SS` text.
    pub created_at: String,
    /// Last update timestamp as `YYYY-MM-DD HH:MM:SS` text.
    pub updated_at: String,
}
