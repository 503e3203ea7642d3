//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing URL records.
///
/// The single shared mutable resource of the application: all mutation goes
/// through it, and its operations are the only points where a request waits
/// on external I/O.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists; this
    /// is distinct from other insert failures so the caller can retry
    /// generation after losing the check-then-insert race.
    ///
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_url: NewUrl) -> Result<UrlRecord, AppError>;

    /// Returns whether any record holds the given short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Finds a record by its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Lists all records. No pagination, no filtering.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Replaces both fields of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record vanished between load
    /// and save. Returns [`AppError::Conflict`] if the new short code
    /// collides with another record's. Returns [`AppError::Internal`] on
    /// other database errors.
    async fn update(
        &self,
        id: i64,
        original_url: &str,
        short_code: &str,
    ) -> Result<UrlRecord, AppError>;

    /// Deletes a record. Idempotent: deleting an absent id succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
