//! Application configuration.
//!
//! A single JSON file in the platform data directory holds the optional
//! database file override. Absent file or absent field means the default
//! location under [`DataStorage`] is used. `tarefa init` runs the interactive
//! setup and writes the file.

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Explicit database file path; `None` selects the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_file: Option<String>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolves the database file location for this configuration.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db_file {
            Some(file) => Ok(PathBuf::from(file)),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
