#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use taskman::libs::manager::TaskManager;
    use taskman::libs::task::{Difficulty, NewTask, TaskStatus};
    use taskman::store::{JsonTaskStore, MemoryTaskStore, StoreError, TaskStore};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
        store: JsonTaskStore,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.json");
            let store = JsonTaskStore::new(&path);
            StoreTestContext {
                _temp_dir: temp_dir,
                path,
                store,
            }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_file_is_absent(ctx: &mut StoreTestContext) {
        assert!(ctx.store.load().unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_and_load(ctx: &mut StoreTestContext) {
        let tasks = vec![
            NewTask::new("Buy milk").difficulty(Difficulty::Easy).build(),
            NewTask::new("File taxes")
                .status(TaskStatus::InProgress)
                .difficulty(Difficulty::Hard)
                .due_date(NaiveDate::from_ymd_opt(2025, 4, 15))
                .build(),
        ];

        ctx.store.save(&tasks).unwrap();

        assert_eq!(ctx.store.load().unwrap().unwrap(), tasks);
        assert!(!ctx.path.with_file_name("tasks.json.tmp").exists());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_replaces_previous_content(ctx: &mut StoreTestContext) {
        ctx.store.save(&[NewTask::new("First").build()]).unwrap();
        ctx.store.save(&[]).unwrap();

        assert!(ctx.store.load().unwrap().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_file_is_parse_error(ctx: &mut StoreTestContext) {
        std::fs::write(&ctx.path, "[{\"title\": 3}]").unwrap();

        let err = ctx.store.load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_loads_legacy_file(ctx: &mut StoreTestContext) {
        let legacy = r#"[
  {
    "id": "5b1d0c0e-7d1f-4a8e-9d43-0f3a9c2b6e11",
    "titulo": "Comprar leche",
    "descripcion": "Entera",
    "estado": "En Curso",
    "dificultad": "Dificil",
    "creacion": "2024-01-10",
    "ultimaEdicion": "2024-01-12",
    "vencimiento": "",
    "deleted": false,
    "relatedTasks": []
  },
  {
    "id": 7,
    "titulo": "Pagar luz",
    "descripcion": "",
    "estado": "Terminada",
    "dificultad": "Facil",
    "creacion": "2024-02-01",
    "ultimaEdicion": "2024-02-01",
    "vencimiento": "2024-02-05",
    "deleted": true,
    "relatedTasks": ["5b1d0c0e-7d1f-4a8e-9d43-0f3a9c2b6e11"]
  }
]"#;
        std::fs::write(&ctx.path, legacy).unwrap();

        let tasks = ctx.store.load().unwrap().unwrap();
        assert_eq!(tasks.len(), 2);

        let first = &tasks[0];
        assert_eq!(first.title(), "Comprar leche");
        assert_eq!(first.status(), TaskStatus::InProgress);
        assert_eq!(first.difficulty(), Difficulty::Hard);
        assert_eq!(first.last_edited_at(), NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
        assert_eq!(first.due_date(), None);

        let second = &tasks[1];
        assert_eq!(second.id(), "7");
        assert_eq!(second.status(), TaskStatus::Done);
        assert_eq!(second.difficulty(), Difficulty::Easy);
        assert_eq!(second.due_date(), NaiveDate::from_ymd_opt(2024, 2, 5));
        assert!(second.is_deleted());
        assert_eq!(second.related_task_ids(), [first.id().to_string()]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_loaded_tasks_are_normalized(ctx: &mut StoreTestContext) {
        let file = r#"[
  {
    "id": "a",
    "title": "Self referencing",
    "status": "Pending",
    "difficulty": "Easy",
    "createdAt": "2026-05-10",
    "lastEditedAt": "2026-01-01",
    "relatedTaskIds": ["a", "b", "a", "b"]
  },
  {
    "id": "b",
    "title": "Other",
    "status": "Done",
    "difficulty": "Medium",
    "createdAt": "2026-01-01",
    "lastEditedAt": "2026-01-02"
  }
]"#;
        std::fs::write(&ctx.path, file).unwrap();

        let manager = TaskManager::new(JsonTaskStore::new(&ctx.path));

        let task = manager.get_task("a").unwrap();
        assert_eq!(task.related_task_ids(), ["b".to_string()]);
        assert_eq!(task.last_edited_at(), task.created_at());
        let related: Vec<&str> = manager.get_related_tasks("a").iter().map(|t| t.id()).collect();
        assert_eq!(related, ["b"]);
        assert_eq!(manager.get_task("b").unwrap().last_edited_at(), NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_failed_save_leaves_no_temp_file(ctx: &mut StoreTestContext) {
        std::fs::create_dir(&ctx.path).unwrap();
        std::fs::write(ctx.path.join("blocker"), "x").unwrap();

        let err = ctx.store.save(&[NewTask::new("Blocked").build()]).unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!ctx.path.with_file_name("tasks.json.tmp").exists());
    }

    #[test]
    fn test_memory_store_shares_state_between_clones() {
        let store = MemoryTaskStore::new();
        let clone = store.clone();
        assert!(store.load().unwrap().is_none());

        clone.save(&[NewTask::new("Shared").build()]).unwrap();

        assert_eq!(store.load().unwrap().unwrap().len(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_memory_store_saves_from_threads() {
        let store = MemoryTaskStore::new();

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let store = store.clone();
                std::thread::spawn(move || store.save(&[NewTask::new(format!("Task {}", n)).build()]).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.save_count(), 4);
        assert_eq!(store.stored().unwrap().len(), 1);
    }

    #[test]
    fn test_memory_store_failing_saves() {
        let store = MemoryTaskStore::with_tasks(vec![NewTask::new("Kept").build()]);
        store.set_fail_saves(true);

        assert!(matches!(store.save(&[]), Err(StoreError::Unavailable(_))));
        assert_eq!(store.stored().unwrap().len(), 1);
    }
}
