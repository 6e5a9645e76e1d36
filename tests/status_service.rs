#[cfg(test)]
mod tests {
    use tarefa::db::db::Db;
    use tarefa::libs::error::ServiceError;
    use tarefa::services::TaskStatusService;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StatusServiceTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StatusServiceTestContext {
        fn setup() -> Self {
            StatusServiceTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl StatusServiceTestContext {
        fn open_db(&self) -> Db {
            Db::new(&self.temp_dir.path().join("status_service.db")).unwrap()
        }
    }

    #[test_context(StatusServiceTestContext)]
    #[test]
    fn test_list_all_status(ctx: &mut StatusServiceTestContext) {
        let db = ctx.open_db();
        let service = TaskStatusService::new(&db);

        let statuses = service.list_all_status().unwrap();
        assert_eq!(statuses.len(), 3);
    }

    #[test_context(StatusServiceTestContext)]
    #[test]
    fn test_get_status_by_name_trims_input(ctx: &mut StatusServiceTestContext) {
        let db = ctx.open_db();
        let service = TaskStatusService::new(&db);

        let status = service.get_status_by_name("  Feita  ").unwrap().unwrap();
        assert_eq!(status.name, "Feita");

        assert!(service.get_status_by_name("Feito").unwrap().is_none());
    }

    #[test_context(StatusServiceTestContext)]
    #[test]
    fn test_get_status_by_name_blank_is_validation_error(ctx: &mut StatusServiceTestContext) {
        let db = ctx.open_db();
        let service = TaskStatusService::new(&db);

        let err = service.get_status_by_name("   ").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test_context(StatusServiceTestContext)]
    #[test]
    fn test_validate_status_name_never_fails(ctx: &mut StatusServiceTestContext) {
        let db = ctx.open_db();
        let service = TaskStatusService::new(&db);

        assert!(service.validate_status_name("Disponível"));
        assert!(service.validate_status_name(" Fazendo "));
        assert!(!service.validate_status_name("Pendente"));
        assert!(!service.validate_status_name(""));
        assert!(!service.validate_status_name("   "));
    }

    #[test_context(StatusServiceTestContext)]
    #[test]
    fn test_get_available_status_names(ctx: &mut StatusServiceTestContext) {
        let db = ctx.open_db();
        let service = TaskStatusService::new(&db);

        let names = service.get_available_status_names().unwrap();
        assert_eq!(names, vec!["Disponível", "Fazendo", "Feita"]);
    }

    #[test_context(StatusServiceTestContext)]
    #[test]
    fn test_empty_table_yields_empty_collections(ctx: &mut StatusServiceTestContext) {
        let db = ctx.open_db();
        db.conn.execute("DELETE FROM task_status", []).unwrap();

        let service = TaskStatusService::new(&db);

        // Both reads agree on the empty-collection convention.
        assert!(service.list_all_status().unwrap().is_empty());
        assert!(service.get_available_status_names().unwrap().is_empty());
    }
}
