//! Task entity and its self-contained derived state.
//!
//! A [`Task`] owns its field-update logic and the pure predicates used by the
//! query layer (overdue, high priority). Fields are private: the id and
//! creation date never change after construction, and every edit goes
//! through [`Task::update`] so that `last_edited_at` is always refreshed.
//!
//! ## Stored Format
//!
//! Tasks serialize to camelCase JSON objects with dates as `YYYY-MM-DD`.
//! Deserialization also accepts files written by the first Spanish-language
//! version of the tracker (`titulo`, `estado`, `vencimiento`, numeric ids,
//! `"Pendiente"` style labels), so an old `tasks.json` can be loaded in place.

use super::validation::{self, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a task. Generated once per task as a UUID v4 string.
pub type TaskId = String;

/// Returns today's date in the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(alias = "Pendiente")]
    Pending,
    #[serde(rename = "In Progress", alias = "En Curso")]
    InProgress,
    #[serde(alias = "Terminada")]
    Done,
    #[serde(alias = "Cancelada")]
    Cancelled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done, TaskStatus::Cancelled];

    /// Display and storage label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "pending" | "pendiente" => Ok(TaskStatus::Pending),
            "inprogress" | "encurso" => Ok(TaskStatus::InProgress),
            "done" | "terminada" => Ok(TaskStatus::Done),
            "cancelled" | "canceled" | "cancelada" => Ok(TaskStatus::Cancelled),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

/// Effort level of a task. `Hard` marks a task as high priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "Facil")]
    Easy,
    #[serde(alias = "Medio")]
    Medium,
    #[serde(alias = "Dificil")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn stars(&self) -> &'static str {
        match self {
            Difficulty::Easy => "⭐",
            Difficulty::Medium => "⭐⭐",
            Difficulty::Hard => "⭐⭐⭐",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "easy" | "facil" | "fácil" => Ok(Difficulty::Easy),
            "medium" | "medio" => Ok(Difficulty::Medium),
            "hard" | "dificil" | "difícil" => Ok(Difficulty::Hard),
            _ => Err(ValidationError::InvalidDifficulty(s.to_string())),
        }
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Partial field update. Only `Some` fields are applied.
///
/// `due_date` is doubly optional: `Some(None)` clears the due date while
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub difficulty: Option<Difficulty>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.difficulty.is_none()
            && self.due_date.is_none()
    }

    /// Checks the text fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validation::validate_title(title)?;
        }
        if let Some(description) = &self.description {
            validation::validate_description(description)?;
        }
        Ok(())
    }
}

/// Field values for a task that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub difficulty: Difficulty,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Starts a pending, medium-difficulty task with no description or due date.
    pub fn new(title: impl Into<String>) -> Self {
        NewTask {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Pending,
            difficulty: Difficulty::Medium,
            due_date: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_title(&self.title)?;
        validation::validate_description(&self.description)
    }

    /// Builds the task. Does not validate; call [`NewTask::validate`] first.
    pub fn build(self) -> Task {
        Task::new(self.title, self.description, self.status, self.difficulty, self.due_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "deserialize_id")]
    id: TaskId,
    #[serde(alias = "titulo")]
    title: String,
    #[serde(default, alias = "descripcion")]
    description: String,
    #[serde(alias = "estado")]
    status: TaskStatus,
    #[serde(alias = "dificultad")]
    difficulty: Difficulty,
    #[serde(alias = "creacion")]
    created_at: NaiveDate,
    #[serde(alias = "ultimaEdicion")]
    last_edited_at: NaiveDate,
    #[serde(default, alias = "vencimiento", deserialize_with = "deserialize_due_date")]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    deleted: bool,
    #[serde(default, alias = "relatedTasks")]
    related_task_ids: Vec<TaskId>,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        difficulty: Difficulty,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self::new_on(title, description, status, difficulty, due_date, today())
    }

    /// Same as [`Task::new`] with an explicit creation date.
    pub fn new_on(
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        difficulty: Difficulty,
        due_date: Option<NaiveDate>,
        created_at: NaiveDate,
    ) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            status,
            difficulty,
            created_at,
            last_edited_at: created_at,
            due_date,
            deleted: false,
            related_task_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn last_edited_at(&self) -> NaiveDate {
        self.last_edited_at
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn related_task_ids(&self) -> &[TaskId] {
        &self.related_task_ids
    }

    /// Applies the provided fields and stamps `last_edited_at` with today.
    pub fn update(&mut self, update: TaskUpdate) {
        self.update_on(update, today());
    }

    /// Applies the provided fields and stamps `last_edited_at` with `date`,
    /// clamped so it never precedes `created_at`.
    pub fn update_on(&mut self, update: TaskUpdate, date: NaiveDate) {
        let TaskUpdate {
            title,
            description,
            status,
            difficulty,
            due_date,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(due_date) = due_date {
            self.due_date = due_date;
        }
        self.last_edited_at = date.max(self.created_at);
    }

    /// Restores the invariants a hand-edited or older file may break: no
    /// self reference, no duplicate related ids (first occurrence kept) and
    /// `last_edited_at` not before `created_at`.
    pub fn normalize(&mut self) {
        let mut seen = HashSet::new();
        let own_id = &self.id;
        self.related_task_ids
            .retain(|related| related != own_id && seen.insert(related.clone()));
        self.last_edited_at = self.last_edited_at.max(self.created_at);
    }

    pub fn soft_delete(&mut self) {
        self.deleted = true;
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(today())
    }

    /// True when a due date is set and falls strictly before `date`.
    pub fn is_overdue_on(&self, date: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < date)
    }

    pub fn is_high_priority(&self) -> bool {
        self.difficulty == Difficulty::Hard
    }

    /// Records a weak reference to another task.
    ///
    /// Returns `false` without changes when `other_id` is this task's own id
    /// or is already related.
    pub fn add_related_task(&mut self, other_id: &str) -> bool {
        if other_id == self.id || self.related_task_ids.iter().any(|id| id == other_id) {
            return false;
        }
        self.related_task_ids.push(other_id.to_string());
        true
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<TaskId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) => validation::parse_optional_date(&text).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_parsing_accepts_labels_and_legacy_names() {
        assert_eq!("in progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("in-progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("En Curso".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("CANCELED".parse::<TaskStatus>().unwrap(), TaskStatus::Cancelled);
        assert!("later".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("Dificil".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_update_clamps_last_edited_to_creation() {
        let mut task = Task::new_on("Plan", "", TaskStatus::Pending, Difficulty::Easy, None, date(2026, 5, 10));
        task.update_on(TaskUpdate::new().status(TaskStatus::Done), date(2026, 5, 1));
        assert_eq!(task.last_edited_at(), date(2026, 5, 10));
        assert_eq!(task.status(), TaskStatus::Done);
    }

    #[test]
    fn test_update_can_clear_due_date() {
        let mut task = Task::new("Plan", "", TaskStatus::Pending, Difficulty::Easy, Some(date(2020, 1, 1)));
        task.update(TaskUpdate::new().due_date(None));
        assert_eq!(task.due_date(), None);
    }

    #[test]
    fn test_overdue_is_strictly_before() {
        let task = Task::new("Pay rent", "", TaskStatus::Pending, Difficulty::Easy, Some(date(2026, 10, 14)));
        assert!(!task.is_overdue_on(date(2026, 10, 14)));
        assert!(task.is_overdue_on(date(2026, 10, 15)));
    }

    #[test]
    fn test_serialized_field_names() {
        let task = Task::new_on("Buy milk", "", TaskStatus::InProgress, Difficulty::Easy, None, date(2026, 10, 14));
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["status"], "In Progress");
        assert_eq!(value["createdAt"], "2026-10-14");
        assert_eq!(value["lastEditedAt"], "2026-10-14");
        assert!(value["dueDate"].is_null());
        assert_eq!(value["relatedTaskIds"], serde_json::json!([]));
    }

    #[test]
    fn test_legacy_record_deserializes() {
        let raw = r#"{
            "id": 3,
            "titulo": "Estudiar",
            "descripcion": "Capitulo 4",
            "estado": "En Curso",
            "dificultad": "Dificil",
            "creacion": "2024-03-01",
            "ultimaEdicion": "2024-03-02",
            "vencimiento": "",
            "deleted": false
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id(), "3");
        assert_eq!(task.title(), "Estudiar");
        assert_eq!(task.status(), TaskStatus::InProgress);
        assert_eq!(task.difficulty(), Difficulty::Hard);
        assert_eq!(task.due_date(), None);
        assert!(task.related_task_ids().is_empty());
    }
}
