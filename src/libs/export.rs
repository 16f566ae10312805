//! Task export for backup and external analysis.
//!
//! ## Features
//!
//! - **CSV**: one row per task with human-readable labels, for spreadsheets
//! - **JSON**: the same records as the task file, suitable as a backup
//! - **File Naming**: timestamped default name in the current directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::libs::export::{ExportFormat, Exporter};
//! use taskman::libs::manager::TaskManager;
//! use taskman::store::MemoryTaskStore;
//!
//! let manager = TaskManager::new(MemoryTaskStore::new());
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&manager.get_active_tasks())?;
//! # Ok::<(), taskman::libs::error::TaskError>(())
//! ```

use super::error::{TaskError, TaskResult};
use super::task::Task;
use super::validation::DATE_FORMAT;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON array in the task file format.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat CSV row for one task.
#[derive(Debug, Serialize)]
pub struct ExportTask {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: String,
    #[serde(rename = "Created")]
    pub created_at: String,
    #[serde(rename = "Last edited")]
    pub last_edited_at: String,
    #[serde(rename = "Due")]
    pub due_date: String,
    #[serde(rename = "Overdue")]
    pub overdue: bool,
    #[serde(rename = "Deleted")]
    pub deleted: bool,
    #[serde(rename = "Related")]
    pub related: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id().to_string(),
            title: task.title().to_string(),
            description: task.description().to_string(),
            status: task.status().to_string(),
            difficulty: task.difficulty().to_string(),
            created_at: task.created_at().format(DATE_FORMAT).to_string(),
            last_edited_at: task.last_edited_at().format(DATE_FORMAT).to_string(),
            due_date: task.due_date().map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
            overdue: task.is_overdue(),
            deleted: task.is_deleted(),
            related: task.related_task_ids().join(";"),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `tasks_export_<timestamp>.<ext>` in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("tasks_export_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension()))
        });
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` and returns the output path.
    pub fn export(&self, tasks: &[&Task]) -> TaskResult<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.export_csv(tasks)?,
            ExportFormat::Json => self.export_json(tasks)?,
        }
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, tasks: &[&Task]) -> TaskResult<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for task in tasks {
            wtr.serialize(ExportTask::from(*task))?;
        }
        wtr.flush().map_err(|source| self.io_error(source))?;
        Ok(())
    }

    fn export_json(&self, tasks: &[&Task]) -> TaskResult<()> {
        let file = File::create(&self.output_path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush().map_err(|source| self.io_error(source))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> TaskError {
        TaskError::Io {
            path: self.output_path.clone(),
            source,
        }
    }
}
