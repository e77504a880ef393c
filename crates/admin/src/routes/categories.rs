//! Categories route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::data::catalogue::{self, Category};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;

/// Categories table template.
#[derive(Template, WebTemplate)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub categories: &'static [Category],
    pub total_products: u32,
}

/// Display the categories table.
pub async fn index(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
    let categories = catalogue::categories();

    CategoriesTemplate {
        admin,
        active: "categories",
        categories,
        total_products: categories.iter().map(|c| c.product_count).sum(),
    }
}
