//! Configuration management for taskman.
//!
//! The configuration is a small JSON document stored next to the task file in
//! the platform data directory. Every field has a default, so a missing file
//! (or a file written by an older version with fewer fields) is not an error.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\taskman\config.json`
//! - **macOS**: `~/Library/Application Support/taskman/config.json`
//! - **Linux**: `~/.local/share/taskman/config.json`
//!
//! `TASKMAN_DATA_DIR` replaces the directory on every platform.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskman::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Tasks are stored in {}", config.tasks_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::manager::SortKey;
use super::messages::Message;
use crate::msg_print;
use crate::store::json::TASKS_FILE_NAME;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Location of the task file. Defaults to `tasks.json` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    /// Order used by listings when no `--sort` is given.
    pub default_sort: SortKey,
}

impl Config {
    /// Reads the configuration from the data directory, or returns the
    /// defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolved path of the task file.
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.tasks_file {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(TASKS_FILE_NAME),
        }
    }

    /// Runs the interactive configuration wizard, starting from the current
    /// configuration.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigWizardHeader, true);

        let default_path = current.tasks_path()?.display().to_string();
        let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(default_path)
            .interact_text()?;

        let sort_names: Vec<&str> = SortKey::ALL.iter().map(SortKey::name).collect();
        let current_sort = SortKey::ALL.iter().position(|k| *k == current.default_sort).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultSort.to_string())
            .items(&sort_names)
            .default(current_sort)
            .interact()?;

        let tasks_file = PathBuf::from(tasks_file.trim());
        let default_tasks_file = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Ok(Config {
            tasks_file: (tasks_file != default_tasks_file).then_some(tasks_file),
            default_sort: SortKey::ALL[selection],
        })
    }
}
