//! URL shortening, resolution, and record lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};

/// Attempt budget for finding a free generated code.
///
/// The 62^5 code space makes more than a couple of collisions in a row
/// vanishingly unlikely; hitting the budget means the space is effectively
/// full and the caller should widen the code length.
const MAX_GENERATION_ATTEMPTS: usize = 16;

/// Service for creating, resolving, and managing short links.
///
/// Owns the code-generation protocol: custom codes are validated and
/// checked against the store, generated codes are retried on collision
/// within a fixed attempt budget.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new service over the given store.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link.
    ///
    /// A non-empty `custom_code` (after trimming) is used as-is; otherwise a
    /// random 5-character code is generated and retried on collision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the original URL is missing, or
    /// if the custom code is too long or already taken. A colliding custom
    /// code is never replaced with a generated one.
    ///
    /// Returns [`AppError::SpaceExhausted`] when generation runs out of
    /// attempts.
    pub async fn create_short_url(
        &self,
        original_url: String,
        custom_code: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        let original_url = original_url.trim().to_owned();
        if original_url.is_empty() {
            return Err(AppError::validation(
                "original_url",
                "The original URL is required.",
            ));
        }

        let custom = custom_code
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());

        let Some(code) = custom else {
            return self.insert_with_generated_code(original_url).await;
        };

        validate_custom_code(&code)?;

        if self.repository.exists(&code).await? {
            return Err(AppError::validation(
                "short_code",
                "This short code already exists. Please choose another one.",
            ));
        }

        match self
            .repository
            .insert(NewUrl {
                original_url,
                short_code: code,
            })
            .await
        {
            Ok(record) => Ok(record),
            // A concurrent request claimed the code between the existence
            // check and the insert. Custom codes are the user's choice, so
            // this surfaces as the same field error instead of a fallback.
            Err(e) if e.is_uniqueness_violation() => Err(AppError::validation(
                "short_code",
                "This short code already exists. Please choose another one.",
            )),
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code to its original URL.
    ///
    /// Read-only and idempotent: repeated calls return the same result
    /// until the record is edited or deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an empty code or no match.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if short_code.is_empty() {
            return Err(AppError::not_found("Short link not found"));
        }

        let record = self
            .repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))?;

        Ok(record.original_url)
    }

    /// Fetches a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has the id.
    pub async fn get_url(&self, id: i64) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL record not found"))
    }

    /// Fetches a record by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has the code.
    pub async fn get_url_by_code(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        if short_code.is_empty() {
            return Err(AppError::not_found("Short link not found"));
        }

        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }

    /// Lists all records.
    pub async fn list_urls(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_all().await
    }

    /// Replaces both fields of an existing record.
    ///
    /// Uniqueness of a changed short code against other records is not
    /// re-checked here; the store's unique index rejects a stolen code on
    /// save, which surfaces as [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is empty after
    /// trimming or the code exceeds the length bound.
    ///
    /// Returns [`AppError::NotFound`] if the record vanished between load
    /// and save.
    pub async fn update_url(
        &self,
        id: i64,
        original_url: String,
        short_code: String,
    ) -> Result<UrlRecord, AppError> {
        let original_url = original_url.trim().to_owned();
        if original_url.is_empty() {
            return Err(AppError::validation(
                "original_url",
                "The original URL is required.",
            ));
        }

        let short_code = short_code.trim().to_owned();
        if short_code.is_empty() {
            return Err(AppError::validation(
                "short_code",
                "The short code is required.",
            ));
        }
        validate_custom_code(&short_code)?;

        self.repository.update(id, &original_url, &short_code).await
    }

    /// Deletes a record. A no-op for an id that is already gone.
    pub async fn delete_url(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Generates a free code and inserts, retrying lost races.
    ///
    /// The unique index is the last line of defense: an insert that loses
    /// the check-then-insert race fails distinctly and counts as a
    /// collision.
    async fn insert_with_generated_code(
        &self,
        original_url: String,
    ) -> Result<UrlRecord, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if self.repository.exists(&code).await? {
                continue;
            }

            match self
                .repository
                .insert(NewUrl {
                    original_url: original_url.clone(),
                    short_code: code,
                })
                .await
            {
                Ok(record) => return Ok(record),
                Err(e) if e.is_uniqueness_violation() => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::SpaceExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    fn service(mock: MockUrlRepository) -> UrlService {
        UrlService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_insert()
            .withf(|new_url| {
                new_url.short_code.len() == 5
                    && new_url.short_code.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|new_url| {
                Ok(UrlRecord::new(1, new_url.original_url, new_url.short_code))
            });

        let result = service(mock)
            .create_short_url("https://example.com".to_string(), None)
            .await;

        let record = result.unwrap();
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_code.len(), 5);
    }

    #[tokio::test]
    async fn test_create_with_custom_code() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists()
            .withf(|code| code == "promo1")
            .times(1)
            .returning(|_| Ok(false));
        mock.expect_insert()
            .withf(|new_url| new_url.short_code == "promo1")
            .times(1)
            .returning(|new_url| {
                Ok(UrlRecord::new(1, new_url.original_url, new_url.short_code))
            });

        let result = service(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some("promo1".to_string()),
            )
            .await;

        assert_eq!(result.unwrap().short_code, "promo1");
    }

    #[tokio::test]
    async fn test_create_trims_custom_code() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists()
            .withf(|code| code == "promo1")
            .times(1)
            .returning(|_| Ok(false));
        mock.expect_insert()
            .withf(|new_url| new_url.short_code == "promo1")
            .times(1)
            .returning(|new_url| {
                Ok(UrlRecord::new(1, new_url.original_url, new_url.short_code))
            });

        let result = service(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some("  promo1  ".to_string()),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_blank_custom_code_generates() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_insert()
            .withf(|new_url| new_url.short_code.len() == 5)
            .times(1)
            .returning(|new_url| {
                Ok(UrlRecord::new(1, new_url.original_url, new_url.short_code))
            });

        let result = service(mock)
            .create_short_url("https://example.com".to_string(), Some("   ".to_string()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_custom_code_collision_is_field_error() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists()
            .withf(|code| code == "promo1")
            .times(1)
            .returning(|_| Ok(true));
        mock.expect_insert().times(0);

        let result = service(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some("promo1".to_string()),
            )
            .await;

        match result.unwrap_err() {
            AppError::Validation { field, .. } => assert_eq!(field, "short_code"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_custom_code_lost_race_is_field_error() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::conflict("short code already exists")));

        let result = service(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some("promo1".to_string()),
            )
            .await;

        match result.unwrap_err() {
            AppError::Validation { field, .. } => assert_eq!(field, "short_code"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_regenerates_on_collision() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists().times(1).returning(|_| Ok(true));
        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_insert().times(1).returning(|new_url| {
            Ok(UrlRecord::new(1, new_url.original_url, new_url.short_code))
        });

        let result = service(mock)
            .create_short_url("https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_retries_lost_insert_race() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists().times(2).returning(|_| Ok(false));
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::conflict("short code already exists")));
        mock.expect_insert().times(1).returning(|new_url| {
            Ok(UrlRecord::new(1, new_url.original_url, new_url.short_code))
        });

        let result = service(mock)
            .create_short_url("https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_gives_up_when_space_exhausted() {
        let mut mock = MockUrlRepository::new();

        mock.expect_exists()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_| Ok(true));
        mock.expect_insert().times(0);

        let result = service(mock)
            .create_short_url("https://example.com".to_string(), None)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::SpaceExhausted { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_requires_original_url() {
        let mock = MockUrlRepository::new();

        let result = service(mock).create_short_url("   ".to_string(), None).await;

        match result.unwrap_err() {
            AppError::Validation { field, .. } => assert_eq!(field, "original_url"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_overlong_custom_code() {
        let mock = MockUrlRepository::new();

        let result = service(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some("waytoolongcode".to_string()),
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { field: "short_code", .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_returns_stored_url() {
        let mut mock = MockUrlRepository::new();

        mock.expect_find_by_code()
            .withf(|code| code == "Ab3x9")
            .times(1)
            .returning(|code| {
                Ok(Some(UrlRecord::new(
                    1,
                    "https://example.com".to_string(),
                    code.to_string(),
                )))
            });

        let url = service(mock).resolve("Ab3x9").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_is_not_found() {
        let mut mock = MockUrlRepository::new();
        mock.expect_find_by_code().times(1).returning(|_| Ok(None));

        let result = service(mock).resolve("doesnotexist").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_empty_code_is_not_found() {
        let mut mock = MockUrlRepository::new();
        mock.expect_find_by_code().times(0);

        let result = service(mock).resolve("").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_requires_both_fields() {
        let mock = MockUrlRepository::new();
        let svc = service(mock);

        let result = svc
            .update_url(1, "".to_string(), "Ab3x9".to_string())
            .await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { field: "original_url", .. }
        ));

        let result = svc
            .update_url(1, "https://example.com".to_string(), "  ".to_string())
            .await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { field: "short_code", .. }
        ));
    }

    #[tokio::test]
    async fn test_update_passes_through_to_store() {
        let mut mock = MockUrlRepository::new();

        mock.expect_update()
            .withf(|id, url, code| *id == 1 && url == "https://new.example.com" && code == "Ab3x9")
            .times(1)
            .returning(|id, url, code| {
                Ok(UrlRecord::new(id, url.to_string(), code.to_string()))
            });

        let record = service(mock)
            .update_url(1, "https://new.example.com".to_string(), "Ab3x9".to_string())
            .await
            .unwrap();

        assert_eq!(record.original_url, "https://new.example.com");
    }

    #[tokio::test]
    async fn test_update_vanished_record_is_not_found() {
        let mut mock = MockUrlRepository::new();

        mock.expect_update()
            .times(1)
            .returning(|_, _, _| Err(AppError::not_found("URL record not found")));

        let result = service(mock)
            .update_url(42, "https://example.com".to_string(), "Ab3x9".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_is_passthrough() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(mock).delete_url(7).await.is_ok());
    }
}
