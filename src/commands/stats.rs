use super::open_manager;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let (_, manager) = open_manager()?;
    let stats = manager.get_stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        msg_print!(Message::StatsHeader, true);
        View::stats(&stats);
    }
    Ok(())
}
