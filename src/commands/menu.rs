//! Interactive numbered menu, the default surface when no subcommand is
//! given. A failed operation is printed and the loop continues; nothing
//! short of choosing "Exit" terminates the process.

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::view::View;
use crate::services::{TaskService, TaskStatusService};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let db = Db::new(&config.db_path()?)?;
    let tasks = TaskService::new(&db);
    let statuses = TaskStatusService::new(&db);

    loop {
        print_menu();

        match read_number(&Message::PromptMenuChoice(1, 5).to_string(), 1, 5)? {
            1 => {
                if let Err(e) = add_task(&tasks, &statuses) {
                    msg_error!(e);
                }
            }
            2 => {
                if let Err(e) = list_tasks(&tasks) {
                    msg_error!(e);
                }
            }
            3 => {
                if let Err(e) = remove_task(&tasks) {
                    msg_error!(e);
                }
            }
            4 => {
                if let Err(e) = change_status(&tasks, &statuses) {
                    msg_error!(e);
                }
            }
            _ => {
                msg_print!(Message::MenuGoodbye);
                break;
            }
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n{}", "=".repeat(40));
    println!("{}", Message::MenuTitle);
    println!("{}", "=".repeat(40));
    println!("1. Add task");
    println!("2. List tasks");
    println!("3. Remove task");
    println!("4. Change status");
    println!("5. Exit");
    println!("{}", "=".repeat(40));
}

fn add_task(tasks: &TaskService, statuses: &TaskStatusService) -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let Some(status_name) = choose_status(statuses)? else {
        return Ok(());
    };

    tasks.create_task(&name, &description, &status_name)?;
    msg_success!(Message::TaskCreated(name.trim().to_string()));

    Ok(())
}

fn list_tasks(tasks: &TaskService) -> Result<()> {
    show_tasks(tasks)?;
    Ok(())
}

/// Prints the task table and hands the listing back so callers can bail out
/// of id prompts when there is nothing to act on.
fn show_tasks(tasks: &TaskService) -> Result<Vec<Task>> {
    let all = tasks.list_all_tasks()?;

    if all.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(all);
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&all)?;
    Ok(all)
}

fn remove_task(tasks: &TaskService) -> Result<()> {
    if show_tasks(tasks)?.is_empty() {
        return Ok(());
    }
    let id = read_id()?;

    if !confirm_sim(Message::ConfirmDeleteTask(id))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    tasks.delete_task(id)?;
    msg_success!(Message::TaskDeleted(id));

    Ok(())
}

fn change_status(tasks: &TaskService, statuses: &TaskStatusService) -> Result<()> {
    if show_tasks(tasks)?.is_empty() {
        return Ok(());
    }
    let id = read_id()?;

    let Some(status_name) = choose_status(statuses)? else {
        return Ok(());
    };

    tasks.update_task_status(id, &status_name)?;
    msg_success!(Message::TaskStatusUpdated(id, status_name));

    Ok(())
}

/// Presents the registered statuses as a numbered list and returns the
/// chosen name, or `None` when no statuses exist.
fn choose_status(statuses: &TaskStatusService) -> Result<Option<String>> {
    let names = statuses.get_available_status_names()?;

    if names.is_empty() {
        msg_error!(Message::NoStatusesFound);
        return Ok(None);
    }

    msg_print!(Message::StatusesHeader);
    for (i, name) in names.iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }

    let choice = read_number(&Message::PromptStatusChoice(names.len()).to_string(), 1, names.len())?;
    Ok(Some(names[choice - 1].clone()))
}

/// Re-asks until the input parses to an integer within the displayed range.
fn read_number(prompt: &str, min: usize, max: usize) -> Result<usize> {
    loop {
        let text: String = Input::with_theme(&ColorfulTheme::default()).with_prompt(prompt).interact_text()?;

        match text.trim().parse::<usize>() {
            Ok(number) if (min..=max).contains(&number) => return Ok(number),
            _ => msg_error!(Message::NumberOutOfRange(min, max)),
        }
    }
}

/// Reads a task id as an integer. Positivity and existence are the service
/// layer's concern, so any integer is accepted here.
fn read_id() -> Result<i64> {
    loop {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskId.to_string())
            .interact_text()?;

        if let Ok(id) = text.trim().parse::<i64>() {
            return Ok(id);
        }
        msg_error!(Message::InvalidNumber);
    }
}

/// Destructive-action confirmation: only "s" or "sim" (case-insensitive)
/// counts as yes, anything else cancels.
fn confirm_sim(prompt: Message) -> Result<bool> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} [s/sim]", prompt))
        .allow_empty(true)
        .interact_text()?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "s" | "sim"))
}
