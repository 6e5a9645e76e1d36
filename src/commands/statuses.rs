use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::services::TaskStatusService;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let db = Db::new(&config.db_path()?)?;
    let service = TaskStatusService::new(&db);

    let statuses = service.list_all_status()?;
    if statuses.is_empty() {
        msg_info!(Message::NoStatusesFound);
        return Ok(());
    }

    msg_print!(Message::StatusesHeader, true);
    View::statuses(&statuses)
}
