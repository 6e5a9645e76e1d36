//! Core library modules for the tarefa application.
//!
//! - **Entities**: plain data holders for tasks and statuses ([`task`])
//! - **Errors**: the service-layer failure taxonomy ([`error`])
//! - **Infrastructure**: configuration, data directory, messaging
//! - **User interface**: console table rendering ([`view`])

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod view;
