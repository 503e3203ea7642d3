#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;

use shorten_url::application::services::UrlService;
use shorten_url::infrastructure::persistence::SqliteUrlRepository;
use shorten_url::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000/";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let url_service = Arc::new(UrlService::new(repository));

    AppState::new(url_service, TEST_BASE_URL.to_string())
}

pub async fn create_test_url(pool: &SqlitePool, original_url: &str, short_code: &str) -> i64 {
    sqlx::query("INSERT INTO urls (original_url, short_code) VALUES (?1, ?2)")
        .bind(original_url)
        .bind(short_code)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
