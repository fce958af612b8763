//! `SQLite` adapters for durable task storage.

mod models;
mod repository;
mod schema;

pub use repository::{SqliteTaskRepository, TaskSqlitePool};
