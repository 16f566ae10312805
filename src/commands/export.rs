use super::open_manager;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file path. Defaults to a timestamped file in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Include soft-deleted tasks
    #[arg(long)]
    include_deleted: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let (_, manager) = open_manager()?;
    let tasks: Vec<&Task> = if args.include_deleted {
        manager.all_tasks().iter().collect()
    } else {
        manager.get_active_tasks()
    };

    if tasks.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let path = Exporter::new(args.format, args.output).export(&tasks)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
