//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                     - List all records
//! - `GET  /urls/new`             - Create form
//! - `POST /urls`                 - Create submission
//! - `GET  /urls/success/{code}`  - Success view with short link + QR
//! - `GET  /urls/{id}`            - Details view with QR
//! - `GET  /urls/{id}/edit`       - Edit form
//! - `POST /urls/{id}`            - Edit submission
//! - `GET  /urls/{id}/delete`     - Delete confirmation
//! - `POST /urls/{id}/delete`     - Delete action
//! - `GET  /u/{code}`             - Short link redirect

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::web::handlers::{
    create_url, delete_url, delete_url_form, edit_url_form, index_handler, new_url_form,
    redirect_handler, show_url, success_handler, update_url,
};

/// Constructs the application router with all routes and request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/urls", post(create_url))
        .route("/urls/new", get(new_url_form))
        .route("/urls/success/{code}", get(success_handler))
        .route("/urls/{id}", get(show_url).post(update_url))
        .route("/urls/{id}/edit", get(edit_url_form))
        .route("/urls/{id}/delete", get(delete_url_form).post(delete_url))
        .route("/u/{code}", get(redirect_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
