//! Utility functions for code generation and QR rendering.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`qr`] - QR code rendering for the share views

pub mod code_generator;
pub mod qr;
