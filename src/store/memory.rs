use super::{StoreError, TaskStore};
use crate::libs::task::Task;
use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Shared {
    tasks: Mutex<Option<Vec<Task>>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

/// In-memory [`TaskStore`].
///
/// Clones share the same backing collection, so a second manager built from a
/// clone sees what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    shared: Arc<Shared>,
}

impl MemoryTaskStore {
    /// An empty store that reports "absent" on first load.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let store = Self::default();
        *store.lock() = Some(tasks);
        store
    }

    /// Makes subsequent saves fail until switched off again.
    pub fn set_fail_saves(&self, fail: bool) {
        self.shared.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.shared.saves.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored collection.
    pub fn stored(&self) -> Option<Vec<Task>> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<Task>>> {
        self.shared.tasks.lock()
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        Ok(self.lock().clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if self.shared.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is read-only".to_string()));
        }
        *self.lock() = Some(tasks.to_vec());
        self.shared.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
