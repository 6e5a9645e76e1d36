use super::task::{Task, TaskStatus};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "STATUS", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![task.id, task.name, task.status.name, task.description]);
        }
        table.printstd();

        Ok(())
    }

    pub fn statuses(statuses: &[TaskStatus]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for status in statuses {
            table.add_row(row![status.id, status.name]);
        }
        table.printstd();

        Ok(())
    }
}
