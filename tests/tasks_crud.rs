#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tinytodo::db::{db::Db, tasks::Tasks};
    use tinytodo::libs::error::StoreError;
    use tinytodo::libs::task::PartialTask;

    struct TaskTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("tasks.db")).unwrap();
            TaskTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn full_task() -> PartialTask {
        PartialTask {
            name: Some("Renew passport".to_string()),
            category: Some("admin".to_string()),
            start_date: Some("2024-01-05".to_string()),
            due_date: Some("2024-02-01".to_string()),
            completion_date: None,
            status: Some("open".to_string()),
            priority: Some("high".to_string()),
            description: Some("Photos and form".to_string()),
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_then_get_round_trip(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);

        let id = tasks.create(&full_task()).unwrap();
        let task = tasks.get_by_id(id).unwrap().unwrap();

        assert_eq!(task.id, id);
        assert_eq!(PartialTask::from(task), full_task());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_unset_fields_stay_unset_and_empty_stays_empty(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);

        let id = tasks
            .create(&PartialTask {
                description: Some(String::new()),
                ..PartialTask::new("Minimal")
            })
            .unwrap();
        let task = tasks.get_by_id(id).unwrap().unwrap();

        assert_eq!(task.name, "Minimal");
        assert_eq!(task.description.as_deref(), Some(""));
        assert_eq!(task.category, None);
        assert_eq!(task.start_date, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.completion_date, None);
        assert_eq!(task.status, None);
        assert_eq!(task.priority, None);

        let nulls: i64 = ctx
            .db
            .conn()
            .query_row("SELECT COUNT(*) FROM Tasks WHERE Category IS NULL AND Description = ''", [], |row| row.get(0))
            .unwrap();
        assert_eq!(nulls, 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_missing_is_none(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        assert!(tasks.get_by_id(42).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_partial_update_preserves_untouched_fields(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let id = tasks
            .create(&PartialTask {
                category: Some("work".to_string()),
                ..PartialTask::new("Quarterly report")
            })
            .unwrap();

        tasks
            .update(
                id,
                PartialTask {
                    due_date: Some("2024-02-02".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.name, "Quarterly report");
        assert_eq!(task.category.as_deref(), Some("work"));
        assert_eq!(task.due_date.as_deref(), Some("2024-02-02"));
        assert_eq!(task.status, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_overwrites_and_renames(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let id = tasks.create(&full_task()).unwrap();

        tasks
            .update(
                id,
                PartialTask {
                    name: Some("Renew passport and ID".to_string()),
                    priority: Some("low".to_string()),
                    category: Some("programming".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.name, "Renew passport and ID");
        assert_eq!(task.priority.as_deref(), Some("low"));
        assert_eq!(task.category.as_deref(), Some("programming"));
        assert_eq!(task.description.as_deref(), Some("Photos and form"));
        assert_eq!(task.start_date.as_deref(), Some("2024-01-05"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_update_changes_nothing(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let id = tasks.create(&full_task()).unwrap();
        let before = tasks.get_by_id(id).unwrap().unwrap();

        tasks.update(id, PartialTask::default()).unwrap();

        assert_eq!(tasks.get_by_id(id).unwrap().unwrap(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task_is_not_found(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);

        let err = tasks.update(999, PartialTask::new("Ghost")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(999)));
        assert_eq!(tasks.count().unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_rejects_blank_name(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let id = tasks.create(&PartialTask::new("Keep me")).unwrap();

        let err = tasks.update(id, PartialTask::new("")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(tasks.get_by_id(id).unwrap().unwrap().name, "Keep me");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_requires_name(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        tasks.create(&PartialTask::new("Existing")).unwrap();

        let missing = PartialTask {
            category: Some("work".to_string()),
            ..Default::default()
        };
        assert!(matches!(tasks.create(&missing), Err(StoreError::Validation(_))));
        assert!(matches!(tasks.create(&PartialTask::new("")), Err(StoreError::Validation(_))));
        assert!(matches!(tasks.create(&PartialTask::new(" \t ")), Err(StoreError::Validation(_))));

        assert_eq!(tasks.count().unwrap(), 1);
        assert_eq!(tasks.list_all_vec().unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_reports_whether_row_existed(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let id = tasks.create(&PartialTask::new("Short lived")).unwrap();

        assert!(tasks.delete(id).unwrap());
        assert!(tasks.get_by_id(id).unwrap().is_none());
        assert!(!tasks.delete(id).unwrap());
        assert!(!tasks.delete(12345).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_many(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let ids: Vec<i64> = (1..=5)
            .map(|i| tasks.create(&PartialTask::new(&format!("Task {}", i))).unwrap())
            .collect();

        let deleted = tasks.delete_many(&[ids[0], 999, ids[1], ids[2]]).unwrap();
        assert_eq!(deleted, vec![ids[0], ids[1], ids[2]]);
        assert_eq!(tasks.count().unwrap(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_rejected_writes_leave_rows_untouched(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let id = tasks.create(&full_task()).unwrap();
        let before = tasks.get_by_id(id).unwrap().unwrap();

        ctx.db
            .conn()
            .execute_batch(
                "CREATE TRIGGER tasks_no_insert BEFORE INSERT ON Tasks BEGIN SELECT RAISE(ABORT, 'read only'); END;
                 CREATE TRIGGER tasks_no_update BEFORE UPDATE ON Tasks BEGIN SELECT RAISE(ABORT, 'read only'); END;
                 CREATE TRIGGER tasks_no_delete BEFORE DELETE ON Tasks BEGIN SELECT RAISE(ABORT, 'read only'); END;",
            )
            .unwrap();

        assert!(matches!(tasks.create(&PartialTask::new("Blocked")), Err(StoreError::Write(_))));
        assert!(matches!(
            tasks.update(
                id,
                PartialTask {
                    status: Some("done".to_string()),
                    ..Default::default()
                }
            ),
            Err(StoreError::Write(_))
        ));
        assert!(matches!(tasks.delete(id), Err(StoreError::Write(_))));
        assert!(matches!(tasks.delete_many(&[id]), Err(StoreError::Write(_))));

        assert_eq!(tasks.get_by_id(id).unwrap().unwrap(), before);
        assert_eq!(tasks.count().unwrap(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_are_not_reused(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let first = tasks.create(&PartialTask::new("One")).unwrap();
        let second = tasks.create(&PartialTask::new("Two")).unwrap();
        assert!(second > first);

        assert!(tasks.delete(second).unwrap());
        let third = tasks.create(&PartialTask::new("Three")).unwrap();
        assert!(third > second);
    }
}
