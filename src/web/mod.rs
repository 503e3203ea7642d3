//! Web layer for the browser-based UI.
//!
//! Provides server-rendered HTML pages for shortening, managing, and
//! sharing links, plus the redirect endpoint. Uses Askama templates.

pub mod handlers;
