use super::messages::Message;
use super::stats::TaskStats;
use super::task::Task;
use super::validation::DATE_FORMAT;
use chrono::NaiveDate;
use prettytable::{row, Table};

/// Number of id characters shown in listings. Any unique prefix is accepted as input.
pub const SHORT_ID_LEN: usize = 8;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "TITLE", "STATUS", "DIFFICULTY", "DUE", "OVERDUE"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![
                index + 1,
                short_id(task.id()),
                task.title(),
                task.status(),
                format!("{} {}", task.difficulty(), task.difficulty().stars()),
                format_optional_date(task.due_date()),
                if task.is_overdue() { "yes" } else { "" }
            ]);
        }
        table.printstd();
    }

    pub fn task(task: &Task, related: &[&Task]) {
        let related_titles = if related.is_empty() {
            Message::NoRelatedPlaceholder.to_string()
        } else {
            related.iter().map(|t| format!("{} ({})", t.title(), short_id(t.id()))).collect::<Vec<_>>().join(", ")
        };
        let description = if task.description().is_empty() {
            Message::NoDataPlaceholder.to_string()
        } else {
            task.description().to_string()
        };

        let mut table = Table::new();
        table.add_row(row!["ID", task.id()]);
        table.add_row(row!["TITLE", task.title()]);
        table.add_row(row!["DESCRIPTION", description]);
        table.add_row(row!["STATUS", task.status()]);
        table.add_row(row!["DIFFICULTY", format!("{} {}", task.difficulty(), task.difficulty().stars())]);
        table.add_row(row!["CREATED", task.created_at().format(DATE_FORMAT)]);
        table.add_row(row!["LAST EDITED", task.last_edited_at().format(DATE_FORMAT)]);
        table.add_row(row!["DUE", format_optional_date(task.due_date())]);
        table.add_row(row!["RELATED", related_titles]);
        table.printstd();
    }

    pub fn stats(stats: &TaskStats) {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "VALUE", "COUNT", "PERCENT"]);
        for entry in &stats.by_status {
            table.add_row(row!["Status", entry.key, entry.count, format!("{:.1}%", entry.percentage)]);
        }
        for entry in &stats.by_difficulty {
            table.add_row(row![
                "Difficulty",
                format!("{} {}", entry.key, entry.key.stars()),
                entry.count,
                format!("{:.1}%", entry.percentage)
            ]);
        }
        table.printstd();

        println!("{}", Message::StatsTotal(stats.total));
        println!("{}", Message::StatsOverdue(stats.overdue));
        println!("{}", Message::StatsHighPriority(stats.high_priority));
    }
}

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| Message::NoDataPlaceholder.to_string())
}
