use blog_core::domain::{Post, PostParams};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(title: &str) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        category: "General".to_owned(),
        tags: vec!["rust".to_owned(), "web".to_owned()],
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post");
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.tags, vec!["rust", "web"]);
}

#[tokio::test]
async fn test_find_missing_post_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let post = Post::new(PostParams {
        title: "A".to_owned(),
        content: "B".to_owned(),
        category: "C".to_owned(),
        tags: vec!["x".to_owned()],
    });
    let row = post::Model {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        category: post.category.clone(),
        tags: post.tags.clone(),
        created_at: post.created_at.into(),
        updated_at: post.updated_at.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved = repo.insert(post.clone()).await.unwrap();
    assert_eq!(saved, post);
}

#[tokio::test]
async fn test_update_without_matching_row_is_not_found() {
    let post: Post = model("Gone").into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo.update(post).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_reports_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let id = Uuid::new_v4();

    assert!(BaseRepository::<Post, Uuid>::delete(&repo, id).await.is_ok());
    assert!(matches!(
        BaseRepository::<Post, Uuid>::delete(&repo, id).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let first = model("First");
    let second = model("Second");
    let ids = vec![first.id, second.id];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![first, second]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_all().await.unwrap();
    assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
}
