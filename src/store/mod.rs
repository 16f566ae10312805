//! Persistence layer for the task collection.
//!
//! The manager only sees the [`TaskStore`] contract: load everything, save
//! everything. Each mutation rewrites the whole collection; query logic never
//! sees how bytes reach the disk.
//!
//! ## Implementations
//!
//! - [`json::JsonTaskStore`]: pretty-printed JSON array in the data directory
//! - [`memory::MemoryTaskStore`]: shared in-memory vector for tests and embedding

use crate::libs::task::Task;
use std::path::PathBuf;
use thiserror::Error;

/// JSON file backed store.
pub mod json;

/// In-memory store.
pub mod memory;

pub use json::JsonTaskStore;
pub use memory::MemoryTaskStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access task file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Task file {} is corrupt: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Task store is unavailable: {0}")]
    Unavailable(String),
}

/// Load-all / save-all persistence contract.
pub trait TaskStore {
    /// Returns every stored task, soft-deleted ones included.
    ///
    /// `Ok(None)` means the store does not exist yet, which is not an error.
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError>;

    /// Replaces the stored collection with `tasks`.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;

    /// Human-readable location used in log messages.
    fn describe(&self) -> String;
}
