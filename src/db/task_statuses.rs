use super::db::Db;
use crate::libs::task::TaskStatus;
use rusqlite::{params, Connection, OptionalExtension, Result};

// No ORDER BY: natural storage order is insertion order for this table.
const SELECT_ALL_STATUSES: &str = "SELECT id, name FROM task_status";
const SELECT_STATUS_BY_NAME: &str = "SELECT id, name FROM task_status WHERE name = ?1";

/// DAO for task statuses. Translates rows into [`TaskStatus`] entities and
/// is, together with [`super::tasks::Tasks`], the only code issuing SQL.
pub struct TaskStatuses<'db> {
    conn: &'db Connection,
}

impl<'db> TaskStatuses<'db> {
    pub fn new(db: &'db Db) -> Self {
        Self { conn: &db.conn }
    }

    /// All statuses in storage order. Empty when the table is empty.
    pub fn list_all(&self) -> Result<Vec<TaskStatus>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_STATUSES)?;
        let status_iter = stmt.query_map([], |row| {
            Ok(TaskStatus {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut statuses = Vec::new();
        for status in status_iter {
            statuses.push(status?);
        }
        Ok(statuses)
    }

    /// Exact-match lookup. No normalization happens here; callers pre-trim.
    pub fn get_by_name(&self, name: &str) -> Result<Option<TaskStatus>> {
        self.conn
            .query_row(SELECT_STATUS_BY_NAME, params![name], |row| {
                Ok(TaskStatus {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
    }
}
