use super::{open_manager, resolve_task};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task id or unique id prefix
    id: String,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let (_, manager) = open_manager()?;
    let Some(task) = resolve_task(&manager, &args.id) else {
        return Ok(());
    };

    msg_print!(Message::TaskDetailsHeader, true);
    View::task(task, &manager.get_related_tasks(task.id()));
    Ok(())
}
