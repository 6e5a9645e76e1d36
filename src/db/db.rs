//! Database connection handle.
//!
//! `Db` is the single storage entry point: the composition root opens one
//! handle and lends it to each DAO constructor. There is no hidden global
//! instance; two handles over different paths are fully independent stores.
//! Opening a handle applies the schema and seeds the domain statuses, so
//! the DAOs themselves never create rows they do not own.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection};
use std::path::Path;

pub const DB_FILE_NAME: &str = "tarefa.db";

const SCHEMA_TASK_STATUS: &str = "CREATE TABLE IF NOT EXISTS task_status (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
)";
const SCHEMA_TASK: &str = "CREATE TABLE IF NOT EXISTS task (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    status_id INTEGER NOT NULL REFERENCES task_status(id)
)";
const SEED_STATUS: &str = "INSERT OR IGNORE INTO task_status (name) VALUES (?1)";

/// Statuses every store starts with. Kept as seed data, not an enum: the
/// table is the source of truth and new statuses are added as rows.
pub const DEFAULT_STATUS_NAMES: [&str; 3] = ["Disponível", "Fazendo", "Feita"];

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at `path`, creating schema and seed statuses on
    /// first use. Fails before any connection attempt when the path is empty.
    pub fn new(path: &Path) -> Result<Db> {
        if path.as_os_str().is_empty() {
            return Err(msg_error_anyhow!(Message::DbPathEmpty));
        }

        let conn = Connection::open(path)?;
        conn.execute(SCHEMA_TASK_STATUS, [])?;
        conn.execute(SCHEMA_TASK, [])?;
        for name in DEFAULT_STATUS_NAMES {
            conn.execute(SEED_STATUS, params![name])?;
        }

        Ok(Db { conn })
    }
}
