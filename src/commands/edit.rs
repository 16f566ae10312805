use super::{input, open_manager, resolve_task};
use crate::libs::messages::Message;
use crate::libs::task::{Difficulty, TaskStatus, TaskUpdate};
use crate::libs::validation::parse_date;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id or unique id prefix
    id: String,
    /// New title
    #[arg(long)]
    title: Option<String>,
    /// New description
    #[arg(long)]
    description: Option<String>,
    /// New status (pending, in-progress, done, cancelled)
    #[arg(short, long)]
    status: Option<TaskStatus>,
    /// New difficulty (easy, medium, hard)
    #[arg(short = 'l', long)]
    difficulty: Option<Difficulty>,
    /// New due date in YYYY-MM-DD format
    #[arg(long, value_parser = parse_date, conflicts_with = "clear_due")]
    due: Option<NaiveDate>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
}

impl EditArgs {
    fn to_update(&self) -> TaskUpdate {
        TaskUpdate {
            title: self.title.as_ref().map(|t| t.trim().to_string()),
            description: self.description.clone(),
            status: self.status,
            difficulty: self.difficulty,
            due_date: if self.clear_due { Some(None) } else { self.due.map(Some) },
        }
    }
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let (_, mut manager) = open_manager()?;
    let Some(task) = resolve_task(&manager, &args.id) else {
        return Ok(());
    };
    let id = task.id().to_string();

    let update = args.to_update();
    let update = if update.is_empty() {
        msg_print!(Message::EditingTask(task.title().to_string()), true);
        let changes = input::prompt_update(task)?;
        if changes.is_empty() {
            msg_info!(Message::NoChangesDetected);
            return Ok(());
        }
        changes
    } else {
        update
    };

    match manager.edit_task(&id, update) {
        Ok(true) => {
            let title = manager.get_task(&id).map(|t| t.title().to_string()).unwrap_or_default();
            msg_success!(Message::TaskUpdated(title));
        }
        Ok(false) => msg_error!(Message::TaskNotUpdated(args.id)),
        Err(err) => msg_bail_anyhow!(Message::ValidationFailed(err.to_string())),
    }
    Ok(())
}
