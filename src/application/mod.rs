//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and the code-generation protocol. Services consume
//! repository traits and provide a clean API for HTTP handlers.

pub mod services;
