//! # Shorten URL
//!
//! A URL shortener with QR code sharing, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Shortening and lifecycle logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **Web Layer** ([`web`]) - Server-rendered CRUD views and the redirect
//!   endpoint
//!
//! ## Features
//!
//! - Random 5-character alphanumeric short codes with collision retry
//! - Optional user-supplied custom codes with field-level validation
//! - QR codes for sharing on the details and success views
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults target local development
//! export DATABASE_URL="sqlite://shorten_url.db?mode=rwc"
//! export BASE_URL="http://localhost:3000/"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{NewUrl, UrlRecord};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
