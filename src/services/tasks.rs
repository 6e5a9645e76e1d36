//! Business rules for tasks.
//!
//! Every operation validates its input before any storage access, then
//! delegates to the DAOs. Validation failures and not-found conditions are
//! distinct [`ServiceError`] variants; storage failures pass through
//! untranslated.

use crate::db::db::Db;
use crate::db::task_statuses::TaskStatuses;
use crate::db::tasks::Tasks;
use crate::libs::error::ServiceError;
use crate::libs::messages::Message;
use crate::libs::task::Task;

pub struct TaskService<'db> {
    tasks: Tasks<'db>,
    statuses: TaskStatuses<'db>,
}

impl<'db> TaskService<'db> {
    pub fn new(db: &'db Db) -> Self {
        Self {
            tasks: Tasks::new(db),
            statuses: TaskStatuses::new(db),
        }
    }

    /// Creates a task from user input.
    ///
    /// Fails with `Validation` on a blank name or blank status name, and
    /// with `NotFound` when the status name does not resolve; in both cases
    /// nothing reaches the insert path. Name and description are stored
    /// trimmed. The new row's id is not reported back (id 0 placeholder);
    /// listing is the way to observe it.
    pub fn create_task(&self, name: &str, description: &str, status_name: &str) -> Result<(), ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Validation(Message::TaskNameEmpty));
        }

        let status_name = status_name.trim();
        if status_name.is_empty() {
            return Err(ServiceError::Validation(Message::StatusNameEmpty));
        }

        let status = self
            .statuses
            .get_by_name(status_name)?
            .ok_or_else(|| ServiceError::NotFound(Message::StatusNotFound(status_name.to_string())))?;

        let task = Task::new(name, description.trim(), status);
        self.tasks.insert(&task)?;

        Ok(())
    }

    pub fn list_all_tasks(&self) -> Result<Vec<Task>, ServiceError> {
        Ok(self.tasks.list_all()?)
    }

    /// Removes a task after confirming it exists. The existence check is a
    /// single-row lookup, so the not-found error is raised before any delete
    /// statement is issued.
    pub fn delete_task(&self, id: i64) -> Result<(), ServiceError> {
        Self::check_id(id)?;

        if self.tasks.get_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound(Message::TaskNotFoundWithId(id)));
        }

        self.tasks.delete(id)?;
        Ok(())
    }

    /// Moves a task to a new status. Failure order: invalid id, blank status
    /// name, missing task, unknown status.
    pub fn update_task_status(&self, id: i64, new_status_name: &str) -> Result<(), ServiceError> {
        Self::check_id(id)?;

        let new_status_name = new_status_name.trim();
        if new_status_name.is_empty() {
            return Err(ServiceError::Validation(Message::StatusNameEmpty));
        }

        if self.tasks.get_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound(Message::TaskNotFoundWithId(id)));
        }

        let new_status = self
            .statuses
            .get_by_name(new_status_name)?
            .ok_or_else(|| ServiceError::NotFound(Message::StatusNotFound(new_status_name.to_string())))?;

        self.tasks.update_status(id, &new_status)?;
        Ok(())
    }

    /// Looks a task up by id; `None` when absent. Fails only on invalid id.
    pub fn get_task_by_id(&self, id: i64) -> Result<Option<Task>, ServiceError> {
        Self::check_id(id)?;

        Ok(self.tasks.get_by_id(id)?)
    }

    fn check_id(id: i64) -> Result<(), ServiceError> {
        if id <= 0 {
            return Err(ServiceError::Validation(Message::TaskIdInvalid(id)));
        }
        Ok(())
    }
}
