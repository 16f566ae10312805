use super::{StoreError, TaskStore};
use crate::libs::task::Task;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Stores the task collection as a pretty-printed JSON array.
///
/// Saves go through a temporary sibling file that is renamed over the target,
/// so an interrupted write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_temp(&self, temp_path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
        let file = File::create(temp_path).map_err(|err| self.io_error(err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush().map_err(|err| self.io_error(err))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_else(|| TASKS_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TaskStore for JsonTaskStore {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let tasks = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(tasks))
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let temp_path = self.temp_path();
        if let Err(err) = self.write_temp(&temp_path, tasks) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        fs::rename(&temp_path, &self.path).map_err(|err| {
            let _ = fs::remove_file(&temp_path);
            self.io_error(err)
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
