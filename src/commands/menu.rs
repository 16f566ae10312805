//! Interactive menu.
//!
//! Mirrors the line-based front-end of the original tracker: a main menu, a
//! "view tasks" submenu with the canned filters, a task list that opens a
//! detail screen, and edit/delete/relate actions from there. Listings hold
//! task ids rather than references so the manager can be mutated between
//! screens; ids that stop resolving (deleted meanwhile) drop out.

use super::{input, load_config};
use crate::libs::config::Config;
use crate::libs::manager::TaskManager;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId, TaskStatus};
use crate::libs::view::{short_id, View};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

pub fn cmd() -> Result<()> {
    let config = load_config();
    let mut manager = TaskManager::open(&config)?;
    main_menu(&config, &mut manager)?;
    msg_print!(Message::Goodbye);
    Ok(())
}

fn select(prompt: Message, items: &[String]) -> Result<usize> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .default(0)
        .interact()?)
}

fn main_menu(config: &Config, manager: &mut TaskManager) -> Result<()> {
    let items = [Message::MenuViewTasks, Message::MenuSearchTask, Message::MenuAddTask, Message::MenuExit].map(|m| m.to_string());

    loop {
        msg_print!(Message::MenuMainHeader, true);
        match select(Message::PromptSelectOption, &items)? {
            0 => view_menu(config, manager)?,
            1 => search(config, manager)?,
            2 => add(manager)?,
            _ => return Ok(()),
        }
    }
}

fn view_menu(config: &Config, manager: &mut TaskManager) -> Result<()> {
    let items = [
        Message::MenuViewAll,
        Message::MenuViewPending,
        Message::MenuViewInProgress,
        Message::MenuViewDone,
        Message::MenuViewStats,
        Message::MenuViewOverdue,
        Message::MenuViewHighPriority,
        Message::MenuBack,
    ]
    .map(|m| m.to_string());

    loop {
        msg_print!(Message::MenuViewHeader, true);
        let ids: Vec<TaskId> = match select(Message::PromptSelectOption, &items)? {
            0 => ids_of(manager.get_active_tasks()),
            1 => ids_of(manager.filter_by_status(TaskStatus::Pending)),
            2 => ids_of(manager.filter_by_status(TaskStatus::InProgress)),
            3 => ids_of(manager.filter_by_status(TaskStatus::Done)),
            4 => {
                msg_print!(Message::StatsHeader, true);
                View::stats(&manager.get_stats());
                continue;
            }
            5 => ids_of(manager.get_overdue_tasks()),
            6 => ids_of(manager.get_high_priority_tasks()),
            _ => return Ok(()),
        };
        browse(config, manager, &ids)?;
    }
}

fn ids_of(tasks: Vec<&Task>) -> Vec<TaskId> {
    tasks.into_iter().map(|t| t.id().to_string()).collect()
}

/// Lists the tasks behind `ids` and opens the selected one until "Back".
fn browse(config: &Config, manager: &mut TaskManager, ids: &[TaskId]) -> Result<()> {
    loop {
        let tasks: Vec<_> = ids.iter().filter_map(|id| manager.get_task(id)).collect();
        if tasks.is_empty() {
            msg_info!(Message::TasksNotFound);
            return Ok(());
        }

        let sorted = manager.sort_tasks(&tasks, config.default_sort);
        msg_print!(Message::TasksHeader, true);
        View::tasks(&sorted);

        let mut items: Vec<String> = sorted
            .iter()
            .map(|t| format!("{} - {} ({} {})", t.title(), t.status(), t.difficulty(), t.difficulty().stars()))
            .collect();
        items.push(Message::MenuBack.to_string());

        let selection = select(Message::PromptSelectTask, &items)?;
        let Some(task) = sorted.get(selection) else {
            return Ok(());
        };
        let id = task.id().to_string();
        details(config, manager, &id)?;
    }
}

fn details(config: &Config, manager: &mut TaskManager, id: &str) -> Result<()> {
    let Some(task) = manager.get_task(id) else {
        return Ok(());
    };
    msg_print!(Message::TaskDetailsHeader, true);
    View::task(task, &manager.get_related_tasks(id));

    let items = [Message::ActionEdit, Message::ActionDelete, Message::ActionRelated, Message::ActionRelate, Message::MenuBack].map(|m| m.to_string());
    match select(Message::PromptSelectOption, &items)? {
        0 => edit(manager, id),
        1 => delete(manager, id),
        2 => {
            let related = ids_of(manager.get_related_tasks(id));
            browse(config, manager, &related)
        }
        3 => relate(manager, id),
        _ => Ok(()),
    }
}

fn add(manager: &mut TaskManager) -> Result<()> {
    let new_task = input::prompt_new_task()?;
    let title = new_task.title.clone();
    match manager.create_task(new_task) {
        Ok(_) => msg_success!(Message::TaskCreated(title)),
        Err(err) => msg_error!(Message::ValidationFailed(err.to_string())),
    }
    Ok(())
}

fn edit(manager: &mut TaskManager, id: &str) -> Result<()> {
    let Some(task) = manager.get_task(id) else {
        return Ok(());
    };
    msg_print!(Message::EditingTask(task.title().to_string()), true);
    let update = input::prompt_update(task)?;
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match manager.edit_task(id, update) {
        Ok(true) => {
            let title = manager.get_task(id).map(|t| t.title().to_string()).unwrap_or_default();
            msg_success!(Message::TaskUpdated(title));
        }
        Ok(false) => msg_error!(Message::TaskNotUpdated(id.to_string())),
        Err(err) => msg_error!(Message::ValidationFailed(err.to_string())),
    }
    Ok(())
}

fn delete(manager: &mut TaskManager, id: &str) -> Result<()> {
    let Some(title) = manager.get_task(id).map(|t| t.title().to_string()) else {
        return Ok(());
    };
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(title.clone()).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
    } else if manager.delete_task(id) {
        msg_success!(Message::TaskDeleted(title));
    }
    Ok(())
}

fn relate(manager: &mut TaskManager, id: &str) -> Result<()> {
    let candidates: Vec<(TaskId, String)> = manager
        .get_active_tasks()
        .into_iter()
        .filter(|t| t.id() != id)
        .map(|t| (t.id().to_string(), format!("{} ({})", t.title(), short_id(t.id()))))
        .collect();
    if candidates.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    let mut items: Vec<String> = candidates.iter().map(|(_, label)| label.clone()).collect();
    items.push(Message::MenuBack.to_string());
    let selection = select(Message::PromptSelectRelatedTask, &items)?;
    let Some((other, _)) = candidates.get(selection) else {
        return Ok(());
    };

    if manager.relate_tasks(id, other) {
        let title_of = |id: &str| manager.get_task(id).map(|t| t.title().to_string()).unwrap_or_default();
        msg_success!(Message::TasksRelated(title_of(id), title_of(other)));
    } else {
        msg_error!(Message::TasksNotRelated);
    }
    Ok(())
}

fn search(config: &Config, manager: &mut TaskManager) -> Result<()> {
    let query: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSearchQuery.to_string())
        .interact_text()?;
    let ids = ids_of(manager.search_by_title(&query));
    browse(config, manager, &ids)
}
