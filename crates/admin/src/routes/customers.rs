//! Customers route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::data::customers::{self, CustomerRecord};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;

/// Filter query parameters for the customers table.
#[derive(Debug, Deserialize)]
pub struct CustomersQuery {
    pub search: Option<String>,
}

/// Customers table template.
#[derive(Template, WebTemplate)]
#[template(path = "customers.html")]
pub struct CustomersTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub records: Vec<&'static CustomerRecord>,
    pub total: usize,
    pub search: String,
}

/// Display the customers table.
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<CustomersQuery>,
) -> impl IntoResponse {
    let search = query.search.unwrap_or_default();

    CustomersTemplate {
        admin,
        active: "customers",
        records: customers::search(&search),
        total: customers::records().len(),
        search,
    }
}
