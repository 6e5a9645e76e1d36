//! # Tarefa - Console Task Manager
//!
//! A command-line utility for managing personal tasks persisted in SQLite.
//!
//! ## Features
//!
//! - **Task Management**: Create, list, remove and re-status tasks
//! - **Data-Driven Statuses**: Statuses are table rows, seeded with
//!   "Disponível", "Fazendo" and "Feita"
//! - **Interactive Menu**: Numbered console menu with confirmation prompts
//! - **Direct Subcommands**: Scriptable `task add/list/delete/set-status`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarefa::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::run()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod services;
