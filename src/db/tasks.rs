use super::db::Db;
use crate::libs::task::{Task, TaskStatus};
use rusqlite::{params, Connection, OptionalExtension, Result};

const INSERT_TASK: &str = "INSERT INTO task (name, description, status_id) VALUES (?1, ?2, ?3)";
const SELECT_TASKS: &str = "
    SELECT t.id, t.name, t.description, s.id, s.name
    FROM task AS t
    JOIN task_status AS s ON t.status_id = s.id";
const WHERE_ID: &str = "WHERE t.id = ?1";
const DELETE_TASK: &str = "DELETE FROM task WHERE id = ?1";
const UPDATE_TASK_STATUS: &str = "UPDATE task SET status_id = ?1 WHERE id = ?2";

/// DAO for tasks. Every read joins to `task_status` and reconstructs the
/// nested entity fresh per row; there is no caching or identity map.
pub struct Tasks<'db> {
    conn: &'db Connection,
}

impl<'db> Tasks<'db> {
    pub fn new(db: &'db Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Inserts name, description and the status id. The generated id is not
    /// backfilled onto `task`; the caller's copy keeps whatever id it had.
    pub fn insert(&self, task: &Task) -> Result<()> {
        self.conn.execute(INSERT_TASK, params![task.name, task.description, task.status.id])?;

        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Single-row lookup by id, used for existence checks so that mutations
    /// never require a full-table fetch.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()
    }

    /// Deletes by id; a missing id is a silent no-op at this layer.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_TASK, params![id])?;

        Ok(())
    }

    /// Repoints the task's status; a missing id is a silent no-op here.
    pub fn update_status(&self, id: i64, status: &TaskStatus) -> Result<()> {
        self.conn.execute(UPDATE_TASK_STATUS, params![status.id, id])?;

        Ok(())
    }

    fn map_row(row: &rusqlite::Row) -> Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            status: TaskStatus {
                id: row.get(3)?,
                name: row.get(4)?,
            },
        })
    }
}
