use super::{open_manager, resolve_task};
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id or unique id prefix
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let (_, mut manager) = open_manager()?;
    let Some(task) = resolve_task(&manager, &args.id) else {
        return Ok(());
    };
    let (id, title) = (task.id().to_string(), task.title().to_string());

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(title.clone()).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if manager.delete_task(&id) {
        msg_success!(Message::TaskDeleted(title));
    } else {
        msg_error!(Message::TaskNotFound(args.id));
    }
    Ok(())
}
