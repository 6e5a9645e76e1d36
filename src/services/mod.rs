//! Business-rule layer.
//!
//! Services validate user input and orchestrate DAO calls; they hold no
//! state beyond the DAOs themselves. Each service is constructed from the
//! shared [`crate::db::db::Db`] handle by the composition root.

pub mod task_statuses;
pub mod tasks;

pub use task_statuses::TaskStatusService;
pub use tasks::TaskService;
