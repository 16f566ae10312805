use super::open_manager;
use crate::libs::manager::{SortKey, TaskManager};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskStatus};
use crate::libs::view::View;
use crate::store::TaskStore;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks with this status
    #[arg(short, long)]
    status: Option<TaskStatus>,
    /// Only overdue tasks
    #[arg(long)]
    overdue: bool,
    /// Only high priority (hard) tasks
    #[arg(long)]
    high_priority: bool,
    /// Sort order (title, due-date, created-at, difficulty). Defaults to the configured order.
    #[arg(long)]
    sort: Option<SortKey>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let (config, manager) = open_manager()?;

    let header = if args.overdue {
        Message::OverdueTasksHeader
    } else if args.high_priority {
        Message::HighPriorityTasksHeader
    } else if let Some(status) = args.status {
        Message::TasksWithStatusHeader(status.to_string())
    } else {
        Message::TasksHeader
    };

    let tasks = select(&manager, &args);
    let sorted = manager.sort_tasks(&tasks, args.sort.unwrap_or(config.default_sort));
    render(header, &sorted, args.json)
}

/// Active tasks matching every given flag. Flags combine: each one narrows
/// the selection further.
fn select<'a, S: TaskStore>(manager: &'a TaskManager<S>, args: &ListArgs) -> Vec<&'a Task> {
    let mut tasks = manager.get_active_tasks();
    if let Some(status) = args.status {
        tasks.retain(|t| t.status() == status);
    }
    if args.overdue {
        tasks.retain(|t| t.is_overdue());
    }
    if args.high_priority {
        tasks.retain(|t| t.is_high_priority());
    }
    tasks
}

/// Prints a task listing as a table, or as JSON when requested.
pub(crate) fn render(header: Message, tasks: &[&Task], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
        return Ok(());
    }
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(header, true);
    View::tasks(tasks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::{Difficulty, NewTask};
    use crate::store::MemoryTaskStore;
    use chrono::NaiveDate;

    fn args(status: Option<TaskStatus>, overdue: bool, high_priority: bool) -> ListArgs {
        ListArgs {
            status,
            overdue,
            high_priority,
            sort: None,
            json: false,
        }
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title().to_string()).collect()
    }

    #[test]
    fn test_select_combines_flags() {
        let mut manager = TaskManager::new(MemoryTaskStore::new());
        let past = NaiveDate::from_ymd_opt(2020, 1, 1);
        for (title, status, difficulty, due) in [
            ("late hard", TaskStatus::Pending, Difficulty::Hard, past),
            ("late easy", TaskStatus::Pending, Difficulty::Easy, past),
            ("hard done", TaskStatus::Done, Difficulty::Hard, None),
            ("plain", TaskStatus::Pending, Difficulty::Medium, None),
        ] {
            manager
                .create_task(NewTask::new(title).status(status).difficulty(difficulty).due_date(due))
                .unwrap();
        }

        assert_eq!(titles(&select(&manager, &args(None, false, false))).len(), 4);
        assert_eq!(
            titles(&select(&manager, &args(Some(TaskStatus::Pending), false, false))),
            titles(&manager.filter_by_status(TaskStatus::Pending))
        );
        assert_eq!(titles(&select(&manager, &args(None, true, true))), ["late hard"]);
        assert_eq!(titles(&select(&manager, &args(Some(TaskStatus::Done), false, true))), ["hard done"]);
        assert!(select(&manager, &args(Some(TaskStatus::Done), true, false)).is_empty());
    }
}
