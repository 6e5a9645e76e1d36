use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::services::TaskService;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Add {
        /// Task name
        name: String,
        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Initial status name
        #[arg(short, long, default_value = "Disponível")]
        status: String,
    },
    /// List all tasks
    List,
    /// Remove a task
    Delete {
        /// Task ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Move a task to another status
    SetStatus {
        /// Task ID
        id: i64,
        /// New status name
        status: String,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let config = Config::read()?;
    let db = Db::new(&config.db_path()?)?;
    let service = TaskService::new(&db);

    match args.command {
        TaskCommand::Add { name, description, status } => handle_add(&service, &name, &description, &status),
        TaskCommand::List => handle_list(&service),
        TaskCommand::Delete { id, yes } => handle_delete(&service, id, yes),
        TaskCommand::SetStatus { id, status } => handle_set_status(&service, id, &status),
    }
}

fn handle_add(service: &TaskService, name: &str, description: &str, status: &str) -> Result<()> {
    service.create_task(name, description, status)?;
    msg_success!(Message::TaskCreated(name.trim().to_string()));
    Ok(())
}

fn handle_list(service: &TaskService) -> Result<()> {
    let tasks = service.list_all_tasks()?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)
}

fn handle_delete(service: &TaskService, id: i64, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(id).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    service.delete_task(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}

fn handle_set_status(service: &TaskService, id: i64, status: &str) -> Result<()> {
    service.update_task_status(id, status)?;
    msg_success!(Message::TaskStatusUpdated(id, status.trim().to_string()));
    Ok(())
}
