//! In-memory task collection with CRUD, queries and persistence orchestration.
//!
//! [`TaskManager`] is the single owner of every [`Task`]. Callers get shared
//! references for display and submit changes by id; soft-deleted tasks stay
//! in the collection (and in the store) but are invisible to every lookup
//! except [`TaskManager::all_tasks`].
//!
//! ## Persistence
//!
//! - Construction loads the full collection. A missing store starts empty; an
//!   unreadable or corrupt store is reported and also starts empty.
//! - Every successful mutation saves the whole collection synchronously. A
//!   failed save is reported but the in-memory change is kept.
//!
//! ## Concurrency
//!
//! Mutations take `&mut self`, so one manager has at most one writer at a
//! time. Two managers over the same file do not coordinate: the last save
//! wins.

use super::config::Config;
use super::messages::Message;
use super::stats::TaskStats;
use super::task::{NewTask, Task, TaskId, TaskStatus, TaskUpdate};
use super::validation::ValidationError;
use crate::store::{JsonTaskStore, TaskStore};
use crate::{msg_debug, msg_error, msg_warning};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Attribute used to order task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Title,
    DueDate,
    CreatedAt,
    /// Orders by the difficulty label text (Easy, Hard, Medium), not by effort.
    Difficulty,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Title, SortKey::DueDate, SortKey::CreatedAt, SortKey::Difficulty];

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::DueDate => "due-date",
            SortKey::CreatedAt => "created-at",
            SortKey::Difficulty => "difficulty",
        }
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::Title => compare_titles(a.title(), b.title()),
            // Option<NaiveDate> orders like the YYYY-MM-DD text with a missing date as "".
            SortKey::DueDate => a.due_date().cmp(&b.due_date()),
            SortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
            SortKey::Difficulty => a.difficulty().label().cmp(b.difficulty().label()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "title" => Ok(SortKey::Title),
            "due" | "due-date" | "duedate" => Ok(SortKey::DueDate),
            "created" | "created-at" | "createdat" => Ok(SortKey::CreatedAt),
            "difficulty" => Ok(SortKey::Difficulty),
            _ => Err(ValidationError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Orders titles the way a reader of a Latin-script list expects: accents and
/// case are ignored first, then unaccented before accented, then lowercase
/// before uppercase.
fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| swap_case(a).cmp(&swap_case(b)))
}

fn collation_key(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

fn swap_case(text: &str) -> String {
    let mut swapped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            swapped.extend(c.to_lowercase());
        } else {
            swapped.extend(c.to_uppercase());
        }
    }
    swapped
}

pub struct TaskManager<S: TaskStore = JsonTaskStore> {
    tasks: Vec<Task>,
    store: S,
}

impl TaskManager<JsonTaskStore> {
    /// Opens the JSON store configured in `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let store = JsonTaskStore::new(config.tasks_path()?);
        Ok(Self::new(store))
    }
}

impl<S: TaskStore> TaskManager<S> {
    /// Loads every task from `store` and normalizes it. Never fails: load
    /// problems are reported and leave the manager empty.
    pub fn new(store: S) -> Self {
        let mut tasks = match store.load() {
            Ok(Some(tasks)) => {
                msg_debug!(Message::TasksLoaded(tasks.len(), store.describe()));
                tasks
            }
            Ok(None) => {
                msg_debug!(Message::TaskStoreNotFound(store.describe()));
                Vec::new()
            }
            Err(err) => {
                msg_warning!(Message::TaskStoreLoadFailed(err.to_string()));
                Vec::new()
            }
        };
        tasks.iter_mut().for_each(Task::normalize);

        Self { tasks, store }
    }

    /// Appends `task` and saves. Returns its id.
    pub fn add_task(&mut self, task: Task) -> TaskId {
        let id = task.id().to_string();
        self.tasks.push(task);
        self.persist();
        id
    }

    /// Validates `new_task`, then builds and adds it.
    pub fn create_task(&mut self, new_task: NewTask) -> Result<TaskId, ValidationError> {
        new_task.validate()?;
        Ok(self.add_task(new_task.build()))
    }

    /// Applies `update` to the active task `id`.
    ///
    /// Returns `Ok(false)` when no active task has that id. Validation runs
    /// first, so an invalid update never touches the task.
    pub fn edit_task(&mut self, id: &str, update: TaskUpdate) -> Result<bool, ValidationError> {
        update.validate()?;
        let Some(task) = self.active_mut(id) else {
            return Ok(false);
        };
        task.update(update);
        self.persist();
        Ok(true)
    }

    /// Soft-deletes the active task `id`. Returns `false` when absent or already deleted.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let Some(task) = self.active_mut(id) else {
            return false;
        };
        task.soft_delete();
        self.persist();
        true
    }

    /// Records `other_id` as related to `id`. Both must be active and distinct.
    ///
    /// Returns `false` when nothing changed.
    pub fn relate_tasks(&mut self, id: &str, other_id: &str) -> bool {
        if id == other_id || self.get_task(other_id).is_none() {
            return false;
        }
        let Some(task) = self.active_mut(id) else {
            return false;
        };
        if !task.add_related_task(other_id) {
            return false;
        }
        self.persist();
        true
    }

    /// Active task with the given id.
    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id && !t.is_deleted())
    }

    /// Active task whose id starts with `prefix`, when exactly one matches.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Task> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return None;
        }
        if let Some(task) = self.get_task(prefix) {
            return Some(task);
        }

        let mut matches = self.active().filter(|t| t.id().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Some(task),
            _ => None,
        }
    }

    /// Every task, soft-deleted ones included, in collection order.
    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_active_tasks(&self) -> Vec<&Task> {
        self.active().collect()
    }

    pub fn filter_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.active().filter(|t| t.status() == status).collect()
    }

    /// Case-insensitive title substring search. A blank query matches nothing.
    pub fn search_by_title(&self, query: &str) -> Vec<&Task> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.active().filter(|t| t.title().to_lowercase().contains(&query)).collect()
    }

    /// Returns a stably sorted copy of `tasks`.
    pub fn sort_tasks<'a>(&self, tasks: &[&'a Task], key: SortKey) -> Vec<&'a Task> {
        sort_tasks(tasks, key)
    }

    pub fn get_stats(&self) -> TaskStats {
        TaskStats::compute(&self.get_active_tasks())
    }

    pub fn get_overdue_tasks(&self) -> Vec<&Task> {
        self.active().filter(|t| t.is_overdue()).collect()
    }

    pub fn get_high_priority_tasks(&self) -> Vec<&Task> {
        self.active().filter(|t| t.is_high_priority()).collect()
    }

    /// Resolves the related ids of active task `id`, skipping any that no
    /// longer point at an active task.
    pub fn get_related_tasks(&self, id: &str) -> Vec<&Task> {
        let Some(task) = self.get_task(id) else {
            return Vec::new();
        };
        task.related_task_ids().iter().filter_map(|related| self.get_task(related)).collect()
    }

    fn active(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.is_deleted())
    }

    fn active_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id && !t.is_deleted())
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.tasks) {
            msg_error!(Message::TasksSaveFailed(err.to_string()));
        }
    }
}

/// Returns a stably sorted copy of `tasks` without touching the input.
pub fn sort_tasks<'a>(tasks: &[&'a Task], key: SortKey) -> Vec<&'a Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("due".parse::<SortKey>().unwrap(), SortKey::DueDate);
        assert_eq!("created_at".parse::<SortKey>().unwrap(), SortKey::CreatedAt);
        assert_eq!("Title".parse::<SortKey>().unwrap(), SortKey::Title);
        assert!("priority".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_title_comparison_ignores_case() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("same", "same"), Ordering::Equal);
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
    }

    #[test]
    fn test_title_comparison_folds_accents() {
        assert_eq!(compare_titles("éclair", "fig"), Ordering::Less);
        assert_eq!(compare_titles("Ñandú", "Oso"), Ordering::Less);
        assert_eq!(compare_titles("eclair", "éclair"), Ordering::Less);
    }
}
