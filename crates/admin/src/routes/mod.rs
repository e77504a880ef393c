//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Health check
//!
//! # Auth
//! GET  /login               - Login page
//! POST /login               - Login action
//! POST /logout              - Logout action
//!
//! # Back office (requires login)
//! GET  /                    - Dashboard
//! GET  /products            - Products table (search/category/status)
//! GET  /products/new        - New product form
//! POST /products            - Create product (accepted, then discarded)
//! GET  /categories          - Categories table
//! GET  /customers           - Customers table (search)
//! GET  /orders              - Orders table (status filter)
//! GET  /analytics           - Revenue, top sellers, traffic
//! GET  /content/pages       - Storefront page inventory
//! GET  /settings            - Store settings
//! POST /settings            - Save store settings (admin role only)
//! ```

pub mod analytics;
pub mod auth;
pub mod categories;
pub mod content;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// One `<option>` in a table page's filter dropdown.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Build a dropdown from `(value, label)` pairs, marking the current
    /// choice. An empty current value selects the first entry.
    #[must_use]
    pub fn build(pairs: &[(&str, &str)], current: &str) -> Vec<Self> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (value, label))| Self {
                value: (*value).to_owned(),
                label: (*label).to_owned(),
                selected: *value == current || (current.is_empty() && i == 0),
            })
            .collect()
    }
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth (the only unguarded pages)
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        // Dashboard
        .route("/", get(dashboard::show))
        // Catalogue
        .route("/products", get(products::index).post(products::create))
        .route("/products/new", get(products::new))
        .route("/categories", get(categories::index))
        // Customers and orders
        .route("/customers", get(customers::index))
        .route("/orders", get(orders::index))
        // Reporting
        .route("/analytics", get(analytics::show))
        // Content and settings
        .route("/content/pages", get(content::pages))
        .route("/settings", get(settings::show).post(settings::save))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option_marks_current() {
        let options = SelectOption::build(&[("all", "All"), ("active", "Active")], "active");
        assert!(!options[0].selected);
        assert!(options[1].selected);
    }

    #[test]
    fn test_select_option_empty_current_selects_first() {
        let options = SelectOption::build(&[("all", "All"), ("active", "Active")], "");
        assert!(options[0].selected);
        assert!(!options[1].selected);
    }
}
