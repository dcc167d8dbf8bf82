mod common;

use snip::domain::entities::NewUrlRecord;
use snip::domain::repositories::UrlRepository;
use snip::error::AppError;
use snip::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_record(code: &str, url: &str) -> NewUrlRecord {
    NewUrlRecord {
        short_code: code.to_string(),
        original_url: url.to_string(),
        expires_at: None,
    }
}

#[sqlx::test]
async fn test_create_record(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.create(new_record("test123", "https://example.com")).await;

    assert!(result.is_ok());
    let record = result.unwrap();
    assert_eq!(record.short_code, "test123");
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.click_count, 0);
    assert!(record.expires_at.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_code_conflicts(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.create(new_record("dup123", "https://first.com"))
        .await
        .unwrap();

    let result = repo.create(new_record("dup123", "https://second.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_url(&pool, "abc123", "https://example.com").await;

    let repo = PgUrlRepository::new(Arc::new(pool));
    let result = repo.find_by_code("abc123").await;

    assert!(result.is_ok());
    let record = result.unwrap();
    assert!(record.is_some());
    assert_eq!(record.unwrap().short_code, "abc123");
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_code_returns_expired_records(pool: PgPool) {
    common::create_expired_url(&pool, "stale1", "https://example.com").await;

    let repo = PgUrlRepository::new(Arc::new(pool));
    let record = repo.find_by_code("stale1").await.unwrap();

    assert!(record.is_some());
    assert!(record.unwrap().is_expired());
}

#[sqlx::test]
async fn test_increment_clicks_live_record(pool: PgPool) {
    common::create_test_url(&pool, "live1", "https://example.com").await;

    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    let url = repo.increment_clicks("live1").await.unwrap();
    assert_eq!(url, Some("https://example.com".to_string()));
    assert_eq!(common::get_click_count(&pool, "live1").await, 1);

    repo.increment_clicks("live1").await.unwrap();
    assert_eq!(common::get_click_count(&pool, "live1").await, 2);
}

#[sqlx::test]
async fn test_increment_clicks_expired_record(pool: PgPool) {
    common::create_expired_url(&pool, "stale2", "https://example.com").await;

    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    let url = repo.increment_clicks("stale2").await.unwrap();

    assert!(url.is_none());
    assert_eq!(common::get_click_count(&pool, "stale2").await, 0);
}

#[sqlx::test]
async fn test_increment_clicks_unknown_code(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let url = repo.increment_clicks("missing").await.unwrap();

    assert!(url.is_none());
}

#[sqlx::test]
async fn test_delete_by_code(pool: PgPool) {
    common::create_test_url(&pool, "doomed", "https://example.com").await;

    let repo = PgUrlRepository::new(Arc::new(pool));

    let deleted = repo.delete_by_code("doomed").await.unwrap();
    assert!(deleted);

    let record = repo.find_by_code("doomed").await.unwrap();
    assert!(record.is_none());
}

#[sqlx::test]
async fn test_delete_by_code_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let deleted = repo.delete_by_code("missing").await.unwrap();

    assert!(!deleted);
}
