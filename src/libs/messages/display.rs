//! Display implementation for taskman messages.
//!
//! Single place where message text is written. Parameterized variants are
//! interpolated here so call sites never build user-facing strings by hand.

use super::types::Message;
use crate::libs::validation::{DATE_FORMAT, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' added and saved.", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated.", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted.", title),
            Message::TaskNotFound(id) => format!("No active task matches '{}'.", id),
            Message::TaskNotUpdated(id) => format!("Task '{}' could not be updated.", id),
            Message::TasksNotFound => "No tasks match the criteria.".to_string(),
            Message::TasksHeader => "Tasks".to_string(),
            Message::TasksWithStatusHeader(status) => format!("Tasks: {}", status),
            Message::OverdueTasksHeader => "Overdue tasks".to_string(),
            Message::HighPriorityTasksHeader => "High priority tasks".to_string(),
            Message::SearchResultsHeader(query) => format!("Tasks matching '{}'", query),
            Message::RelatedTasksHeader(title) => format!("Tasks related to '{}'", title),
            Message::TaskDetailsHeader => "Task details".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::EditingTask(title) => format!("Editing task: {} (leave a field unchanged to keep it)", title),
            Message::TasksRelated(title, related) => format!("'{}' is now related to '{}'.", title, related),
            Message::TasksNotRelated => "Tasks were not related: both must be active, distinct and not already related.".to_string(),
            Message::NoDataPlaceholder => "No data".to_string(),
            Message::NoRelatedPlaceholder => "None".to_string(),
            Message::ValidationFailed(error) => format!("Invalid task data: {}", error),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader => "Statistics".to_string(),
            Message::StatsTotal(total) => format!("Total tasks: {}", total),
            Message::StatsOverdue(count) => format!("Overdue: {}", count),
            Message::StatsHighPriority(count) => format!("High priority: {}", count),

            // === STORAGE MESSAGES ===
            Message::TasksLoaded(count, location) => format!("Loaded {} tasks from {}", count, location),
            Message::TaskStoreNotFound(location) => format!("Task file {} not found, starting with an empty list", location),
            Message::TaskStoreLoadFailed(error) => format!("Failed to load tasks, starting with an empty list: {}", error),
            Message::TasksSaveFailed(error) => format!("Failed to save tasks: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigWizardHeader => "Taskman configuration".to_string(),
            Message::ConfigLoadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::NothingToExport => "There are no tasks to export.".to_string(),

            // === MENU MESSAGES ===
            Message::MenuMainHeader => "=== MAIN MENU ===".to_string(),
            Message::MenuViewHeader => "=== VIEW TASKS ===".to_string(),
            Message::MenuViewAll => "View all tasks".to_string(),
            Message::MenuViewPending => "View pending tasks".to_string(),
            Message::MenuViewInProgress => "View tasks in progress".to_string(),
            Message::MenuViewDone => "View finished tasks".to_string(),
            Message::MenuViewStats => "View statistics".to_string(),
            Message::MenuViewOverdue => "View overdue tasks".to_string(),
            Message::MenuViewHighPriority => "View high priority tasks".to_string(),
            Message::MenuViewTasks => "View my tasks".to_string(),
            Message::MenuSearchTask => "Search a task".to_string(),
            Message::MenuAddTask => "Add a task".to_string(),
            Message::MenuBack => "Back".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::ActionEdit => "Edit task".to_string(),
            Message::ActionDelete => "Delete task".to_string(),
            Message::ActionRelated => "View related tasks".to_string(),
            Message::ActionRelate => "Relate to another task".to_string(),
            Message::Goodbye => "Bye!".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => format!("Title (max {} characters)", MAX_TITLE_LEN),
            Message::PromptTaskDescription => format!("Description (max {} characters, optional)", MAX_DESCRIPTION_LEN),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptTaskDifficulty => "Difficulty".to_string(),
            Message::PromptTaskDueDate => format!("Due date ({}, empty for none)", DATE_FORMAT.replace("%Y", "YYYY").replace("%m", "MM").replace("%d", "DD")),
            Message::PromptSearchQuery => "Title to search".to_string(),
            Message::PromptSelectOption => "Select an option".to_string(),
            Message::PromptSelectTask => "Select a task for details".to_string(),
            Message::PromptSelectRelatedTask => "Select the related task".to_string(),
            Message::PromptTasksFile => "Task file".to_string(),
            Message::PromptDefaultSort => "Default sort order".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_messages() {
        assert_eq!(Message::TaskCreated("Buy milk".to_string()).to_string(), "Task 'Buy milk' added and saved.");
        assert_eq!(Message::PromptTaskDueDate.to_string(), "Due date (YYYY-MM-DD, empty for none)");
        assert_eq!(Message::PromptTaskTitle.to_string(), "Title (max 100 characters)");
    }
}
