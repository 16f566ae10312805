use super::{input, open_manager};
use crate::libs::messages::Message;
use crate::libs::task::{Difficulty, NewTask, TaskStatus};
use crate::libs::validation::parse_date;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title. Prompts for every field when omitted.
    title: Option<String>,
    /// Task description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Initial status (pending, in-progress, done, cancelled)
    #[arg(short, long, default_value = "pending")]
    status: TaskStatus,
    /// Difficulty (easy, medium, hard)
    #[arg(short = 'l', long, default_value = "medium")]
    difficulty: Difficulty,
    /// Due date in YYYY-MM-DD format
    #[arg(long, value_parser = parse_date)]
    due: Option<NaiveDate>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let new_task = match args.title {
        Some(title) => NewTask::new(title.trim())
            .description(args.description)
            .status(args.status)
            .difficulty(args.difficulty)
            .due_date(args.due),
        None => input::prompt_new_task()?,
    };

    let (_, mut manager) = open_manager()?;
    let title = new_task.title.clone();
    match manager.create_task(new_task) {
        Ok(_) => msg_success!(Message::TaskCreated(title)),
        Err(err) => msg_bail_anyhow!(Message::ValidationFailed(err.to_string())),
    }
    Ok(())
}
