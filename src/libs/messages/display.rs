//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text: every message shown on
//! the console is defined here, keyed by a `Message` variant. Parameters are
//! interpolated with typed `format!` arguments, so message text and call
//! sites cannot drift apart.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created", name),
            Message::TaskDeleted(id) => format!("Task {} removed", id),
            Message::TaskStatusUpdated(id, status) => format!("Task {} moved to '{}'", id, status),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::NoTasksFound => "No tasks registered yet".to_string(),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::TaskNameEmpty => "The task name cannot be empty".to_string(),
            Message::TaskIdInvalid(id) => format!("The task ID must be a positive integer, got {}", id),
            Message::ConfirmDeleteTask(id) => format!("Remove task {}?", id),

            // === STATUS MESSAGES ===
            Message::StatusesHeader => "🏷️ Available statuses".to_string(),
            Message::NoStatusesFound => "No statuses registered".to_string(),
            Message::StatusNotFound(name) => format!("Status '{}' not found", name),
            Message::StatusNameEmpty => "The status name cannot be empty".to_string(),

            // === MENU MESSAGES ===
            Message::MenuTitle => "TASK MANAGER".to_string(),
            Message::MenuGoodbye => "Bye!".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptMenuChoice(min, max) => format!("Choose ({}-{})", min, max),
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskDescription => "Description (may be empty)".to_string(),
            Message::PromptTaskId => "Task ID".to_string(),
            Message::PromptStatusChoice(max) => format!("Status (1-{})", max),
            Message::PromptDbFile => "Database file".to_string(),
            Message::NumberOutOfRange(min, max) => format!("Enter a number between {} and {}", min, max),
            Message::InvalidNumber => "Enter a valid number".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::DbPathEmpty => "The database file path must be a non-empty string".to_string(),
        };

        write!(f, "{}", text)
    }
}
