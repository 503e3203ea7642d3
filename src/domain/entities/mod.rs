//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation uses
//! a separate `NewUrl` struct; the store assigns the `id`.

pub mod url_record;

pub use url_record::{NewUrl, UrlRecord};
