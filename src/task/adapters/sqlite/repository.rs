//! `SQLite` repository implementation for durable task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Priority, TIMESTAMP_FORMAT, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

/// `SQLite` connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Idempotent table definition applied on startup.
const CREATE_TASKS_TABLE: &str = concat!(
    "CREATE TABLE IF NOT EXISTS tasks (",
    "id INTEGER PRIMARY KEY AUTOINCREMENT, ",
    "title TEXT NOT NULL, ",
    "description TEXT, ",
    "owner TEXT, ",
    "priority TEXT NOT NULL, ",
    "status TEXT NOT NULL, ",
    "created_at TEXT NOT NULL, ",
    "updated_at TEXT NOT NULL)",
);

diesel::define_sql_function! {
    /// Rowid of the most recent successful insert on this connection.
    fn last_insert_rowid() -> diesel::sql_types::BigInt;
}

/// Per-connection pragmas applied when the pool hands out a connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // Writers back off instead of failing immediately when another
        // pooled connection holds the write lock.
        diesel::sql_query("PRAGMA busy_timeout = 5000")
            .execute(connection)
            .map_err(diesel::r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// `SQLite`-backed task repository.
///
/// Holds a process-lifetime connection pool; the tasks table is created
/// idempotently when the repository is constructed.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Opens (or creates) the database at `database_path` and ensures the
    /// tasks table exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the database
    /// cannot be opened or the schema cannot be created. Callers treat
    /// this as fatal at startup; there is no retry.
    pub fn connect(database_path: &str) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = Pool::builder()
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;

        let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
        diesel::sql_query(CREATE_TASKS_TABLE)
            .execute(&mut connection)
            .map_err(TaskRepositoryError::persistence)?;
        drop(connection);

        tracing::debug!(path = database_path, "opened task store");
        Ok(Self { pool })
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            // Same pooled connection as the insert, so the rowid is the
            // one just assigned.
            let id = diesel::select(last_insert_rowid())
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let row = find_row_by_id(connection, id)?
                .ok_or_else(|| TaskRepositoryError::CorruptRecord {
                    id,
                    reason: "row missing immediately after insert".to_owned(),
                })?;
            row_to_task(row)
        })
        .await
    }

    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>> {
        let raw_id = id.value();
        let status_text = status.as_str();
        let updated_at_text = format_timestamp(updated_at);

        self.run_blocking(move |connection| {
            // Single-statement update; MAX keeps updated_at from moving
            // before created_at (the text format sorts lexicographically).
            // Zero affected rows means an unknown id, which is a no-op.
            let affected = diesel::sql_query(
                "UPDATE tasks SET status = ?, updated_at = MAX(created_at, ?) WHERE id = ?",
            )
            .bind::<diesel::sql_types::Text, _>(status_text)
            .bind::<diesel::sql_types::Text, _>(updated_at_text)
            .bind::<diesel::sql_types::BigInt, _>(raw_id)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Ok(None);
            }

            find_row_by_id(connection, raw_id)?.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let raw_id = id.value();
        self.run_blocking(move |connection| {
            find_row_by_id(connection, raw_id)?.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn find_row_by_id(
    connection: &mut SqliteConnection,
    id: i64,
) -> TaskRepositoryResult<Option<TaskRow>> {
    tasks::table
        .filter(tasks::id.eq(id))
        .select(TaskRow::as_select())
        .first::<TaskRow>(connection)
        .optional()
        .map_err(TaskRepositoryError::persistence)
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        owner: task.owner().map(str::to_owned),
        priority: task.priority().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        created_at: format_timestamp(task.created_at()),
        updated_at: format_timestamp(task.updated_at()),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id: raw_id,
        title,
        description,
        owner,
        priority: persisted_priority,
        status: persisted_status,
        created_at: persisted_created_at,
        updated_at: persisted_updated_at,
    } = row;

    let corrupt = |reason: String| TaskRepositoryError::CorruptRecord { id: raw_id, reason };

    let id = TaskId::new(raw_id).map_err(|err| corrupt(err.to_string()))?;
    let priority =
        Priority::try_from(persisted_priority.as_str()).map_err(|err| corrupt(err.to_string()))?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(|err| corrupt(err.to_string()))?;
    let created_at =
        parse_timestamp(&persisted_created_at).map_err(|err| corrupt(err.to_string()))?;
    let updated_at =
        parse_timestamp(&persisted_updated_at).map_err(|err| corrupt(err.to_string()))?;

    let data = PersistedTaskData {
        id,
        title,
        description,
        owner,
        priority,
        status,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}
