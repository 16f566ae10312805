#[cfg(test)]
mod tests {
    use taskman::libs::export::{ExportFormat, Exporter};
    use taskman::libs::task::{Difficulty, NewTask, Task, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Vec<Task>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let tasks = vec![
                NewTask::new("Buy milk").difficulty(Difficulty::Easy).build(),
                NewTask::new("Plan trip, summer")
                    .description("Flights and hotel")
                    .status(TaskStatus::InProgress)
                    .difficulty(Difficulty::Hard)
                    .build(),
            ];
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                tasks,
            }
        }
    }

    impl ExportTestContext {
        fn refs(&self) -> Vec<&Task> {
            self.tasks.iter().collect()
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.csv");

        let written = Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&ctx.refs()).unwrap();
        assert_eq!(written, path);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "ID");
        assert_eq!(&headers[1], "Title");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Buy milk");
        assert_eq!(&rows[1][1], "Plan trip, summer");
        assert_eq!(&rows[1][3], "In Progress");
        assert_eq!(&rows[1][4], "Hard");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_matches_task_format(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");

        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&ctx.refs()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Vec<Task> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, ctx.tasks);
    }

    #[test]
    fn test_default_export_name() {
        let exporter = Exporter::new(ExportFormat::Csv, None);
        let name = exporter.output_path().to_string_lossy().to_string();

        assert!(name.starts_with("tasks_export_"));
        assert!(name.ends_with(".csv"));
    }
}
