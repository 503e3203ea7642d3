//! Application error taxonomy and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced by services and repositories.
///
/// Every error resolves at the boundary of a single request. Handlers either
/// render a field-level message back into the submitted form
/// ([`AppError::Validation`]) or let the error convert into a plain HTTP
/// response via [`IntoResponse`].
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or a user-supplied value is unacceptable.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The requested record or short code does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// The store rejected a mutation, typically a unique-index violation
    /// on `short_code`.
    #[error("{message}")]
    Conflict { message: String },

    /// Code generation gave up after exhausting its attempt budget.
    #[error("short code space exhausted after {attempts} attempts")]
    SpaceExhausted { attempts: usize },

    /// Any other store or rendering failure.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Maps a SQLx error at the repository boundary.
    ///
    /// Unique-constraint violations become [`AppError::Conflict`] so callers
    /// can tell a lost generation race apart from other store failures.
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return Self::conflict("short code already exists");
            }
        }

        tracing::error!(error = %e, "database error");
        Self::internal("database error")
    }

    /// Returns true for store-level uniqueness violations.
    pub fn is_uniqueness_violation(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::SpaceExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
