//! Command-line front-end.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! entry point. Commands open the configured [`TaskManager`], perform one
//! operation and render the result; all task semantics stay in `libs`.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod input;
pub mod list;
pub mod menu;
pub mod relate;
pub mod search;
pub mod show;
pub mod stats;

use crate::libs::config::Config;
use crate::libs::manager::TaskManager;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId};
use crate::store::TaskStore;
use crate::{msg_error, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List active tasks")]
    List(list::ListArgs),
    #[command(about = "Show task details", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task (soft delete)", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Search tasks by title", arg_required_else_help = true)]
    Search(search::SearchArgs),
    #[command(about = "Show task statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Relate a task to another task", arg_required_else_help = true)]
    Relate(relate::RelateArgs),
    #[command(about = "List the tasks related to a task", arg_required_else_help = true)]
    Related(relate::RelatedArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Interactive menu")]
    Menu,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Relate(args) => relate::cmd(args),
            Commands::Related(args) => relate::related_cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Menu => menu::cmd(),
        }
    }
}

/// Reads the configuration, falling back to defaults when it is unreadable.
pub(crate) fn load_config() -> Config {
    match Config::read() {
        Ok(config) => config,
        Err(err) => {
            msg_warning!(Message::ConfigLoadFailed(err.to_string()));
            Config::default()
        }
    }
}

/// Opens the task manager over the configured task file.
pub(crate) fn open_manager() -> Result<(Config, TaskManager)> {
    let config = load_config();
    let manager = TaskManager::open(&config)?;
    Ok((config, manager))
}

/// Resolves a full id or unique id prefix to an active task, reporting a miss.
pub(crate) fn resolve_task<'a, S: TaskStore>(manager: &'a TaskManager<S>, id: &str) -> Option<&'a Task> {
    let task = manager.find_by_prefix(id);
    if task.is_none() {
        msg_error!(Message::TaskNotFound(id.to_string()));
    }
    task
}

/// Same as [`resolve_task`] but returns an owned id, releasing the borrow.
pub(crate) fn resolve_id<S: TaskStore>(manager: &TaskManager<S>, id: &str) -> Option<TaskId> {
    resolve_task(manager, id).map(|task| task.id().to_string())
}
