//! Content page route handlers.
//!
//! Serves the markdown pages loaded at startup: about, contact, shipping,
//! privacy, terms. Whatever exists in the content directory is servable;
//! there is no per-page route to keep in sync.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalCustomer;
use crate::models::customer::Customer;
use crate::state::AppState;

/// Shared 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub customer: Option<Customer>,
    pub message: &'static str,
}

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/show.html")]
pub struct ContentPageTemplate {
    pub customer: Option<Customer>,
    pub title: String,
    pub description: String,
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Display a content page by slug.
#[instrument(skip_all, fields(page = %slug))]
pub async fn show(
    State(state): State<AppState>,
    OptionalCustomer(customer): OptionalCustomer,
    Path(slug): Path<String>,
) -> Response {
    match state.content().get_page(&slug) {
        Some(page) => ContentPageTemplate {
            customer,
            title: page.meta.title.clone(),
            description: page.meta.description.clone().unwrap_or_default(),
            updated_at: page.meta.updated_at,
            content_html: page.content_html.clone(),
        }
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                customer,
                message: "That page does not exist.",
            },
        )
            .into_response(),
    }
}
