//! # Taskman - personal task tracking
//!
//! A command-line task tracker. Tasks carry a title, description, status,
//! difficulty, optional due date and links to related tasks. They live in a
//! single JSON file, and deletion is soft: deleted tasks stay in the file but
//! are hidden from every view.
//!
//! ## Layout
//!
//! - [`libs`]: the task model, manager, statistics, configuration, messages
//!   and console rendering
//! - [`store`]: persistence backends behind the [`store::TaskStore`] trait
//! - [`commands`]: the clap front-end and the interactive menu
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::libs::manager::TaskManager;
//! use taskman::libs::task::{Difficulty, NewTask};
//! use taskman::store::JsonTaskStore;
//!
//! let mut manager = TaskManager::new(JsonTaskStore::new("tasks.json"));
//! let id = manager
//!     .create_task(NewTask::new("Buy milk").difficulty(Difficulty::Easy))
//!     .expect("valid task");
//! assert!(manager.get_task(&id).is_some());
//! ```

pub mod commands;
pub mod libs;
pub mod store;
