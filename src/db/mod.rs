//! Data-access layer built on SQLite.
//!
//! The only layer permitted to issue SQL. [`db::Db`] is the connection
//! handle the composition root passes to each DAO; [`tasks::Tasks`] and
//! [`task_statuses::TaskStatuses`] translate between query rows and the
//! domain entities in [`crate::libs::task`]. Storage errors surface as
//! `rusqlite::Error` and propagate unmodified through the layers above.

/// Core database connection handle, schema setup and status seeding.
pub mod db;

/// Task status lookups.
pub mod task_statuses;

/// Task CRUD operations.
pub mod tasks;
