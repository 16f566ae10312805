use super::{list, open_manager};
use crate::libs::manager::SortKey;
use crate::libs::messages::Message;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in task titles (case-insensitive)
    query: String,
    /// Sort order (title, due-date, created-at, difficulty)
    #[arg(long)]
    sort: Option<SortKey>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let (config, manager) = open_manager()?;
    let found = manager.search_by_title(&args.query);
    let sorted = manager.sort_tasks(&found, args.sort.unwrap_or(config.default_sort));
    list::render(Message::SearchResultsHeader(args.query.trim().to_string()), &sorted, args.json)
}
