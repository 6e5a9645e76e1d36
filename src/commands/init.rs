use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Interactive configuration setup: asks where the database file should
/// live and persists the answer.
pub fn cmd() -> Result<()> {
    let mut config = Config::read()?;
    let current = config.db_path()?.to_string_lossy().to_string();

    let db_file: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDbFile.to_string())
        .default(current)
        .interact_text()?;

    config.db_file = Some(db_file);
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
