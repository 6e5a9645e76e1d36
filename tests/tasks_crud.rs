#[cfg(test)]
mod tests {
    use tarefa::db::db::Db;
    use tarefa::db::task_statuses::TaskStatuses;
    use tarefa::db::tasks::Tasks;
    use tarefa::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn open_db(&self) -> Db {
            Db::new(&self.temp_dir.path().join("tasks.db")).unwrap()
        }
    }

    fn task_with_status(db: &Db, name: &str, description: &str, status_name: &str) -> Task {
        let status = TaskStatuses::new(db).get_by_name(status_name).unwrap().unwrap();
        Task::new(name, description, status)
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_and_list_reconstructs_status(ctx: &mut TaskTestContext) {
        let db = ctx.open_db();
        let tasks = Tasks::new(&db);

        let task = task_with_status(&db, "Buy milk", "2%", "Disponível");
        tasks.insert(&task).unwrap();

        let all = tasks.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Buy milk");
        assert_eq!(all[0].description, "2%");
        assert_eq!(all[0].status.id, 1);
        assert_eq!(all[0].status.name, "Disponível");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_does_not_backfill_id(ctx: &mut TaskTestContext) {
        let db = ctx.open_db();
        let tasks = Tasks::new(&db);

        let task = task_with_status(&db, "No backfill", "", "Disponível");
        tasks.insert(&task).unwrap();

        // The caller's copy keeps the placeholder; the row got a real id.
        assert_eq!(task.id, 0);
        assert_eq!(tasks.list_all().unwrap()[0].id, 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_id(ctx: &mut TaskTestContext) {
        let db = ctx.open_db();
        let tasks = Tasks::new(&db);

        tasks.insert(&task_with_status(&db, "First", "", "Fazendo")).unwrap();

        let found = tasks.get_by_id(1).unwrap().unwrap();
        assert_eq!(found.name, "First");
        assert_eq!(found.status.name, "Fazendo");

        assert!(tasks.get_by_id(99).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete(ctx: &mut TaskTestContext) {
        let db = ctx.open_db();
        let tasks = Tasks::new(&db);

        tasks.insert(&task_with_status(&db, "Doomed", "", "Disponível")).unwrap();
        tasks.delete(1).unwrap();

        assert!(tasks.list_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_id_is_noop(ctx: &mut TaskTestContext) {
        let db = ctx.open_db();
        let tasks = Tasks::new(&db);

        // Existence is the service layer's concern, not this one's.
        assert!(tasks.delete(42).is_ok());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_status(ctx: &mut TaskTestContext) {
        let db = ctx.open_db();
        let tasks = Tasks::new(&db);
        let statuses = TaskStatuses::new(&db);

        tasks.insert(&task_with_status(&db, "Moving", "", "Disponível")).unwrap();

        let feita = statuses.get_by_name("Feita").unwrap().unwrap();
        tasks.update_status(1, &feita).unwrap();

        let updated = tasks.get_by_id(1).unwrap().unwrap();
        assert_eq!(updated.status.id, 3);
        assert_eq!(updated.status.name, "Feita");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_status_missing_id_is_noop(ctx: &mut TaskTestContext) {
        let db = ctx.open_db();
        let tasks = Tasks::new(&db);
        let statuses = TaskStatuses::new(&db);

        let feita = statuses.get_by_name("Feita").unwrap().unwrap();
        assert!(tasks.update_status(42, &feita).is_ok());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_two_reads_yield_distinct_objects(ctx: &mut TaskTestContext) {
        let db = ctx.open_db();
        let tasks = Tasks::new(&db);

        tasks.insert(&task_with_status(&db, "Fresh", "each read", "Disponível")).unwrap();

        // No identity map: equal values, independent objects.
        let first = tasks.get_by_id(1).unwrap().unwrap();
        let second = tasks.get_by_id(1).unwrap().unwrap();
        assert_eq!(first, second);
    }
}
