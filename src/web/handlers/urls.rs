//! CRUD page handlers for URL records.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::qr::svg_data_uri;

/// Form payload shared by the create and edit views.
#[derive(Debug, Default, Deserialize)]
pub struct UrlForm {
    #[serde(default)]
    pub original_url: String,
    #[serde(default)]
    pub short_code: String,
}

/// Template for the record list page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    urls: Vec<UrlRecord>,
}

/// Template for the create form.
#[derive(Template, WebTemplate)]
#[template(path = "new.html")]
pub struct NewUrlTemplate {
    original_url: String,
    short_code: String,
    original_url_error: Option<String>,
    short_code_error: Option<String>,
}

/// Template for the post-create success view.
#[derive(Template, WebTemplate)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    url: UrlRecord,
    short_link: String,
    qr_data_uri: String,
}

/// Template for the record details page.
#[derive(Template, WebTemplate)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
    url: UrlRecord,
    short_link: String,
    qr_data_uri: String,
}

/// Template for the edit form.
#[derive(Template, WebTemplate)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    id: i64,
    original_url: String,
    short_code: String,
    original_url_error: Option<String>,
    short_code_error: Option<String>,
}

/// Template for the delete confirmation page.
#[derive(Template, WebTemplate)]
#[template(path = "delete.html")]
pub struct DeleteTemplate {
    url: UrlRecord,
}

/// Splits a field-level validation message into the form's error slots.
fn field_errors(field: &str, message: String) -> (Option<String>, Option<String>) {
    if field == "original_url" {
        (Some(message), None)
    } else {
        (None, Some(message))
    }
}

/// `GET /` — lists all records.
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let urls = state.url_service.list_urls().await?;
    Ok(IndexTemplate { urls })
}

/// `GET /urls/new` — renders the create form.
pub async fn new_url_form() -> NewUrlTemplate {
    NewUrlTemplate {
        original_url: String::new(),
        short_code: String::new(),
        original_url_error: None,
        short_code_error: None,
    }
}

/// `POST /urls` — creates a record and redirects to the success view.
///
/// A validation failure re-renders the form with the field-level message
/// and commits nothing.
pub async fn create_url(
    State(state): State<AppState>,
    Form(form): Form<UrlForm>,
) -> Result<Response, AppError> {
    match state
        .url_service
        .create_short_url(form.original_url.clone(), Some(form.short_code.clone()))
        .await
    {
        Ok(record) => {
            tracing::info!(code = %record.short_code, "short link created");
            Ok(Redirect::to(&format!("/urls/success/{}", record.short_code)).into_response())
        }
        Err(AppError::Validation { field, message }) => {
            let (original_url_error, short_code_error) = field_errors(field, message);
            let template = NewUrlTemplate {
                original_url: form.original_url,
                short_code: form.short_code,
                original_url_error,
                short_code_error,
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
        Err(e) => Err(e),
    }
}

/// `GET /urls/success/{code}` — success view with the public short link
/// and a QR rendering of that short link.
pub async fn success_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<SuccessTemplate, AppError> {
    let url = state.url_service.get_url_by_code(&code).await?;
    let short_link = state.short_link(&url.short_code);
    let qr_data_uri = svg_data_uri(&short_link)?;

    Ok(SuccessTemplate {
        url,
        short_link,
        qr_data_uri,
    })
}

/// `GET /urls/{id}` — details view with a QR rendering of the original URL.
pub async fn show_url(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<DetailsTemplate, AppError> {
    let url = state.url_service.get_url(id).await?;
    let short_link = state.short_link(&url.short_code);
    let qr_data_uri = svg_data_uri(&url.original_url)?;

    Ok(DetailsTemplate {
        url,
        short_link,
        qr_data_uri,
    })
}

/// `GET /urls/{id}/edit` — renders the edit form prefilled.
pub async fn edit_url_form(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<EditTemplate, AppError> {
    let url = state.url_service.get_url(id).await?;

    Ok(EditTemplate {
        id: url.id,
        original_url: url.original_url,
        short_code: url.short_code,
        original_url_error: None,
        short_code_error: None,
    })
}

/// `POST /urls/{id}` — saves an edit and redirects to the details view.
pub async fn update_url(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<UrlForm>,
) -> Result<Response, AppError> {
    match state
        .url_service
        .update_url(id, form.original_url.clone(), form.short_code.clone())
        .await
    {
        Ok(record) => Ok(Redirect::to(&format!("/urls/{}", record.id)).into_response()),
        Err(AppError::Validation { field, message }) => {
            let (original_url_error, short_code_error) = field_errors(field, message);
            let template = EditTemplate {
                id,
                original_url: form.original_url,
                short_code: form.short_code,
                original_url_error,
                short_code_error,
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
        Err(e) => Err(e),
    }
}

/// `GET /urls/{id}/delete` — renders the delete confirmation page.
pub async fn delete_url_form(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<DeleteTemplate, AppError> {
    let url = state.url_service.get_url(id).await?;
    Ok(DeleteTemplate { url })
}

/// `POST /urls/{id}/delete` — deletes the record and redirects to the list.
///
/// Deleting an id that is already gone is a no-op, not an error.
pub async fn delete_url(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.url_service.delete_url(id).await?;
    Ok(Redirect::to("/"))
}
