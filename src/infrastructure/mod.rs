//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer, providing the
//! concrete persistence backend.

pub mod persistence;
