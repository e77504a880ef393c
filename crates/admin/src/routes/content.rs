//! Content pages route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use overland_core::PageStatus;

use crate::data::content::{self, PageRecord};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;

/// Content pages table template.
#[derive(Template, WebTemplate)]
#[template(path = "content_pages.html")]
pub struct ContentPagesTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub pages: Vec<PageRecord>,
    pub published: usize,
    pub drafts: usize,
}

/// Display the storefront page inventory.
pub async fn pages(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
    let pages = content::pages();
    let published = pages
        .iter()
        .filter(|p| p.status == PageStatus::Published)
        .count();
    let drafts = pages
        .iter()
        .filter(|p| p.status == PageStatus::Draft)
        .count();

    ContentPagesTemplate {
        admin,
        active: "content",
        pages,
        published,
        drafts,
    }
}
