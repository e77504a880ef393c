//! Orders route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::data::orders::{self, OrderRecord};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;
use crate::routes::SelectOption;

/// Filter query parameters for the orders table.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub status: Option<String>,
}

/// Orders table template.
#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub records: Vec<&'static OrderRecord>,
    pub total: usize,
    pub status_options: Vec<SelectOption>,
}

fn status_options(current: &str) -> Vec<SelectOption> {
    SelectOption::build(
        &[
            ("all", "All Statuses"),
            ("pending", "Pending"),
            ("processing", "Processing"),
            ("shipped", "Shipped"),
            ("delivered", "Delivered"),
            ("completed", "Completed"),
            ("cancelled", "Cancelled"),
        ],
        current,
    )
}

/// Display the orders table.
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<OrdersQuery>,
) -> impl IntoResponse {
    let status = query.status.unwrap_or_default();

    OrdersTemplate {
        admin,
        active: "orders",
        records: orders::by_status(&status),
        total: orders::records().len(),
        status_options: status_options(&status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_cover_every_lifecycle_state() {
        let options = status_options("shipped");
        assert_eq!(options.len(), 7);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "shipped");
    }
}
