//! Dashboard route handler.
//!
//! Headline metrics come from the analytics series; the restock list is
//! driven by the live low-stock threshold from the settings store, so
//! changing the threshold on the settings page changes this list.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::data::analytics::{self, Headline};
use crate::data::catalogue::{self, CatalogueEntry};
use crate::data::orders::{self, OrderRecord};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;
use crate::state::AppState;

/// How many orders the dashboard lists.
const RECENT_ORDERS: usize = 5;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub first_name: String,
    pub headline: Headline,
    pub recent_orders: Vec<&'static OrderRecord>,
    pub low_stock: Vec<&'static CatalogueEntry>,
    pub low_stock_threshold: u32,
}

/// Display the dashboard.
pub async fn show(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> impl IntoResponse {
    let threshold = state.settings().snapshot().alerts.low_stock_threshold;

    DashboardTemplate {
        first_name: admin
            .name
            .split_whitespace()
            .next()
            .unwrap_or(&admin.name)
            .to_owned(),
        admin,
        active: "dashboard",
        headline: analytics::headline(),
        recent_orders: orders::recent(RECENT_ORDERS),
        low_stock: catalogue::low_stock(threshold),
        low_stock_threshold: threshold,
    }
}
