use super::{list, open_manager, resolve_id};
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RelateArgs {
    /// Task id or unique id prefix
    id: String,
    /// Id or unique id prefix of the task to relate to
    other: String,
}

#[derive(Debug, Args)]
pub struct RelatedArgs {
    /// Task id or unique id prefix
    id: String,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: RelateArgs) -> Result<()> {
    let (_, mut manager) = open_manager()?;
    let (Some(id), Some(other)) = (resolve_id(&manager, &args.id), resolve_id(&manager, &args.other)) else {
        return Ok(());
    };

    if manager.relate_tasks(&id, &other) {
        let title_of = |id: &str| manager.get_task(id).map(|t| t.title().to_string()).unwrap_or_default();
        msg_success!(Message::TasksRelated(title_of(&id), title_of(&other)));
    } else {
        msg_error!(Message::TasksNotRelated);
    }
    Ok(())
}

pub fn related_cmd(args: RelatedArgs) -> Result<()> {
    let (_, manager) = open_manager()?;
    let Some(id) = resolve_id(&manager, &args.id) else {
        return Ok(());
    };

    let title = manager.get_task(&id).map(|t| t.title().to_string()).unwrap_or_default();
    list::render(Message::RelatedTasksHeader(title), &manager.get_related_tasks(&id), args.json)
}
