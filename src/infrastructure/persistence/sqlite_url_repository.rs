//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape shared by all record queries.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.original_url, row.short_code)
    }
}

/// SQLite repository for URL record storage and retrieval.
///
/// The `urls` table carries a unique index on `short_code`; inserts and
/// updates that violate it map to [`AppError::Conflict`] via
/// [`AppError::from_sqlx`].
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES (?1, ?2)
            RETURNING id, original_url, short_code
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_code)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(AppError::from_sqlx)?;

        Ok(row.into())
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = ?1)",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(AppError::from_sqlx)?;

        Ok(exists)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "SELECT id, original_url, short_code FROM urls WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(AppError::from_sqlx)?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "SELECT id, original_url, short_code FROM urls WHERE short_code = ?1",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(AppError::from_sqlx)?;

        Ok(row.map(UrlRecord::from))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            "SELECT id, original_url, short_code FROM urls ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(AppError::from_sqlx)?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        original_url: &str,
        short_code: &str,
    ) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE urls
            SET original_url = ?1, short_code = ?2
            WHERE id = ?3
            RETURNING id, original_url, short_code
            "#,
        )
        .bind(original_url)
        .bind(short_code)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(AppError::from_sqlx)?;

        // No row updated means the record vanished between load and save.
        row.map(UrlRecord::from)
            .ok_or_else(|| AppError::not_found("URL record not found"))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM urls WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(AppError::from_sqlx)?;

        Ok(())
    }
}
