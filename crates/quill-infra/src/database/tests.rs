#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use quill_core::domain::{Post, Role};
    use quill_core::ports::{BaseRepository, PostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn post_model(id: i64, title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            title: title.to_owned(),
            content: "content".to_owned(),
            author: "author".to_owned(),
            created_date: now.into(),
            modified_date: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(7, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(7).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 7);
    }

    #[tokio::test]
    async fn test_find_all_desc_maps_rows_in_query_order() {
        // The mock returns rows as given; the repository must not reorder.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(2, "newer"), post_model(1, "older")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_all_desc().await.unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(posts[0].title, "newer");
    }

    #[tokio::test]
    async fn test_delete_of_absent_row_is_silent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Result<(), _> = BaseRepository::<Post, i64>::delete_by_id(&repo, 42).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_find_user_by_email_maps_role() {
        let now = chrono::Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: 3,
                name: "jane".to_owned(),
                email: "jane@example.com".to_owned(),
                picture: None,
                role: "USER".to_owned(),
                created_date: now.into(),
                modified_date: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user = repo.find_by_email("jane@example.com").await.unwrap().unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.role, Role::User);
    }
}
