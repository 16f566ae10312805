//! Aggregate statistics over active tasks.

use super::task::{today, Difficulty, Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Count and share of one category value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats<K> {
    pub key: K,
    pub count: usize,
    /// Share of the total in percent, `0.0` when there are no tasks.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub by_status: Vec<CategoryStats<TaskStatus>>,
    pub by_difficulty: Vec<CategoryStats<Difficulty>>,
    pub overdue: usize,
    pub high_priority: usize,
}

impl TaskStats {
    /// Builds statistics for `tasks`, treating `date` as the current day.
    ///
    /// Every status and difficulty appears in the result in canonical order,
    /// including values with a zero count.
    pub fn compute_on(tasks: &[&Task], date: NaiveDate) -> Self {
        let total = tasks.len();

        let by_status = TaskStatus::ALL
            .iter()
            .map(|&status| category(status, tasks.iter().filter(|t| t.status() == status).count(), total))
            .collect();
        let by_difficulty = Difficulty::ALL
            .iter()
            .map(|&difficulty| category(difficulty, tasks.iter().filter(|t| t.difficulty() == difficulty).count(), total))
            .collect();

        TaskStats {
            total,
            by_status,
            by_difficulty,
            overdue: tasks.iter().filter(|t| t.is_overdue_on(date)).count(),
            high_priority: tasks.iter().filter(|t| t.is_high_priority()).count(),
        }
    }

    pub fn compute(tasks: &[&Task]) -> Self {
        Self::compute_on(tasks, today())
    }

    pub fn status(&self, status: TaskStatus) -> Option<&CategoryStats<TaskStatus>> {
        self.by_status.iter().find(|c| c.key == status)
    }

    pub fn difficulty(&self, difficulty: Difficulty) -> Option<&CategoryStats<Difficulty>> {
        self.by_difficulty.iter().find(|c| c.key == difficulty)
    }
}

fn category<K>(key: K, count: usize, total: usize) -> CategoryStats<K> {
    let percentage = if total > 0 { count as f64 / total as f64 * 100.0 } else { 0.0 };
    CategoryStats { key, count, percentage }
}
