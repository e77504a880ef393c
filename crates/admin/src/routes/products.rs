//! Product route handlers.
//!
//! The table filters the static catalogue; the create form validates its
//! input and then discards it, since there is no product persistence. The
//! form still round-trips properly (validation errors, success flash) so
//! the workflow is real even though the write is not.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use overland_core::PartStatus;

use crate::data::catalogue::{self, CatalogueEntry};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;
use crate::routes::SelectOption;
use crate::routes::auth::MessageQuery;

/// Filter query parameters for the products table.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub success: Option<String>,
}

/// New product form data.
#[derive(Debug, Deserialize)]
pub struct NewProductForm {
    pub name: String,
    pub sku: String,
    pub brand: Option<String>,
    pub category: String,
    pub price: String,
    pub stock: Option<u32>,
}

/// Headline counts above the products table.
#[derive(Debug, Clone, Copy)]
pub struct StockSummary {
    pub total: usize,
    pub active: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl StockSummary {
    fn compute(entries: &[CatalogueEntry]) -> Self {
        Self {
            total: entries.len(),
            active: count(entries, PartStatus::Active),
            low_stock: count(entries, PartStatus::LowStock),
            out_of_stock: count(entries, PartStatus::OutOfStock),
        }
    }
}

fn count(entries: &[CatalogueEntry], status: PartStatus) -> usize {
    entries.iter().filter(|e| e.status == status).count()
}

/// Products table template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub entries: Vec<&'static CatalogueEntry>,
    pub summary: StockSummary,
    pub search: String,
    pub category_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub success: Option<&'static str>,
}

/// New product form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct NewProductTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub category_options: Vec<SelectOption>,
    pub error: Option<&'static str>,
}

/// Map a products `?success=` code to the flash banner.
fn success_message(code: &str) -> &'static str {
    match code {
        "created" => "Product saved. It will appear once the catalogue import runs.",
        _ => "Saved.",
    }
}

/// Map a new-product `?error=` code to the message shown above the form.
fn form_error_message(code: &str) -> &'static str {
    match code {
        "missing_name" => "Enter a product name.",
        "missing_sku" => "Enter a SKU.",
        "invalid_price" => "Enter the price as a non-negative amount, e.g. 89.99.",
        _ => "Something went wrong. Please try again.",
    }
}

fn category_options(current: &str) -> Vec<SelectOption> {
    let mut pairs = vec![("all", "All Categories")];
    pairs.extend(
        catalogue::category_names()
            .into_iter()
            .map(|name| (name, name)),
    );
    SelectOption::build(&pairs, current)
}

fn status_options(current: &str) -> Vec<SelectOption> {
    SelectOption::build(
        &[
            ("all", "All Statuses"),
            ("active", "Active"),
            ("low-stock", "Low Stock"),
            ("out-of-stock", "Out of Stock"),
            ("draft", "Draft"),
        ],
        current,
    )
}

/// Display the products table.
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<ProductsQuery>,
) -> impl IntoResponse {
    let search = query.search.unwrap_or_default();
    let category = query.category.unwrap_or_default();
    let status = query.status.unwrap_or_default();

    ProductsTemplate {
        admin,
        active: "products",
        entries: catalogue::filter(&search, &category, &status),
        summary: StockSummary::compute(catalogue::entries()),
        search,
        category_options: category_options(&category),
        status_options: status_options(&status),
        success: query.success.as_deref().map(success_message),
    }
}

/// Display the new product form.
pub async fn new(
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    NewProductTemplate {
        admin,
        active: "products",
        category_options: category_options(""),
        error: query.error.as_deref().map(form_error_message),
    }
}

/// Handle the new product form.
///
/// Validates and logs the submission, then discards it: the catalogue is a
/// static fixture and nothing server-side persists.
#[instrument(skip_all, fields(sku = %form.sku))]
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<NewProductForm>,
) -> Response {
    if form.name.trim().is_empty() {
        return Redirect::to("/products/new?error=missing_name").into_response();
    }
    if form.sku.trim().is_empty() {
        return Redirect::to("/products/new?error=missing_sku").into_response();
    }
    let Ok(price) = form.price.trim().parse::<Decimal>() else {
        return Redirect::to("/products/new?error=invalid_price").into_response();
    };
    if price.is_sign_negative() {
        return Redirect::to("/products/new?error=invalid_price").into_response();
    }

    tracing::info!(
        admin = %admin.email,
        name = %form.name.trim(),
        price = %price,
        stock = form.stock.unwrap_or(0),
        "Product accepted (demo: not persisted)"
    );
    Redirect::to("/products?success=created").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_by_status() {
        let summary = StockSummary::compute(catalogue::entries());
        assert_eq!(summary.total, catalogue::entries().len());
        assert_eq!(
            summary.active + summary.low_stock + summary.out_of_stock + 1, // one draft
            summary.total
        );
    }

    #[test]
    fn test_category_options_include_all_and_categories() {
        let options = category_options("");
        assert_eq!(options[0].value, "all");
        assert!(options[0].selected);
        assert!(options.iter().any(|o| o.value == "Engine"));
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(form_error_message("missing_sku"), "Enter a SKU.");
        assert_eq!(
            form_error_message("invalid_price"),
            "Enter the price as a non-negative amount, e.g. 89.99."
        );
    }
}
