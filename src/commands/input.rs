//! Interactive field prompts shared by `add`, `edit` and the menu.

use crate::libs::messages::Message;
use crate::libs::task::{Difficulty, NewTask, Task, TaskStatus, TaskUpdate};
use crate::libs::validation::{parse_optional_date, validate_description, validate_title, DATE_FORMAT};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub fn prompt_title(default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .validate_with(|value: &String| validate_title(value).map_err(|e| e.to_string()));
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}

pub fn prompt_description(default: &str) -> Result<String> {
    let description = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(default.to_string())
        .allow_empty(true)
        .validate_with(|value: &String| validate_description(value).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(description)
}

pub fn select_status(default: TaskStatus) -> Result<TaskStatus> {
    let labels: Vec<&str> = TaskStatus::ALL.iter().map(TaskStatus::label).collect();
    let position = TaskStatus::ALL.iter().position(|s| *s == default).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&labels)
        .default(position)
        .interact()?;
    Ok(TaskStatus::ALL[selection])
}

pub fn select_difficulty(default: Difficulty) -> Result<Difficulty> {
    let labels: Vec<String> = Difficulty::ALL.iter().map(|d| format!("{} {}", d, d.stars())).collect();
    let position = Difficulty::ALL.iter().position(|d| *d == default).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDifficulty.to_string())
        .items(&labels)
        .default(position)
        .interact()?;
    Ok(Difficulty::ALL[selection])
}

pub fn prompt_due_date(default: Option<NaiveDate>) -> Result<Option<NaiveDate>> {
    let default = default.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default();
    let raw = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(default)
        .allow_empty(true)
        .validate_with(|value: &String| parse_optional_date(value).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(parse_optional_date(&raw)?)
}

/// Prompts for every field of a new task.
pub fn prompt_new_task() -> Result<NewTask> {
    let title = prompt_title(None)?;
    let description = prompt_description("")?;
    let status = select_status(TaskStatus::Pending)?;
    let difficulty = select_difficulty(Difficulty::Easy)?;
    let due_date = prompt_due_date(None)?;

    Ok(NewTask::new(title)
        .description(description)
        .status(status)
        .difficulty(difficulty)
        .due_date(due_date))
}

/// Prompts for every field with the current values as defaults and returns
/// only the fields that changed.
pub fn prompt_update(task: &Task) -> Result<TaskUpdate> {
    let title = prompt_title(Some(task.title()))?;
    let description = prompt_description(task.description())?;
    let status = select_status(task.status())?;
    let difficulty = select_difficulty(task.difficulty())?;
    let due_date = prompt_due_date(task.due_date())?;

    Ok(TaskUpdate {
        title: (title != task.title()).then_some(title),
        description: (description != task.description()).then_some(description),
        status: (status != task.status()).then_some(status),
        difficulty: (difficulty != task.difficulty()).then_some(difficulty),
        due_date: (due_date != task.due_date()).then_some(due_date),
    })
}
