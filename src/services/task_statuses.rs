//! Business rules for task statuses.

use crate::db::db::Db;
use crate::db::task_statuses::TaskStatuses;
use crate::libs::error::ServiceError;
use crate::libs::messages::Message;
use crate::libs::task::TaskStatus;

pub struct TaskStatusService<'db> {
    statuses: TaskStatuses<'db>,
}

impl<'db> TaskStatusService<'db> {
    pub fn new(db: &'db Db) -> Self {
        Self {
            statuses: TaskStatuses::new(db),
        }
    }

    pub fn list_all_status(&self) -> Result<Vec<TaskStatus>, ServiceError> {
        Ok(self.statuses.list_all()?)
    }

    /// Trims the name and looks it up; `None` when no status matches.
    /// Fails with `Validation` on a blank name.
    pub fn get_status_by_name(&self, status_name: &str) -> Result<Option<TaskStatus>, ServiceError> {
        let status_name = status_name.trim();
        if status_name.is_empty() {
            return Err(ServiceError::Validation(Message::StatusNameEmpty));
        }

        Ok(self.statuses.get_by_name(status_name)?)
    }

    /// Never fails: blank input, a missing status and a storage failure all
    /// report `false`.
    pub fn validate_status_name(&self, status_name: &str) -> bool {
        let status_name = status_name.trim();
        if status_name.is_empty() {
            return false;
        }

        matches!(self.statuses.get_by_name(status_name), Ok(Some(_)))
    }

    /// Names of all registered statuses; empty when none exist.
    pub fn get_available_status_names(&self) -> Result<Vec<String>, ServiceError> {
        let statuses = self.statuses.list_all()?;

        Ok(statuses.into_iter().map(|status| status.name).collect())
    }
}
