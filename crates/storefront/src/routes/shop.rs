//! Shop route handlers.
//!
//! One page per vehicle model, filtered and sorted entirely on the server.
//! The filter form does a plain GET back to the same URL, so every state of
//! the page is a bookmarkable link.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::data::{self, Part, SortOrder, Vehicle};
use crate::filters;
use crate::middleware::OptionalCustomer;
use crate::models::customer::Customer;
use crate::routes::pages::NotFoundTemplate;

// ============================================================================
// Query Types
// ============================================================================

/// Filter and sort query parameters for the shop page.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

// ============================================================================
// View Models
// ============================================================================

/// One `<option>` in the shop page's filter and sort dropdowns.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The category dropdown: "All Categories" plus every category this
/// vehicle has parts in, with the current choice marked.
fn category_options(categories: &[&'static str], current: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: "all".to_owned(),
        label: "All Categories".to_owned(),
        selected: current.is_empty() || current == "all",
    }];
    options.extend(categories.iter().map(|&category| SelectOption {
        value: category.to_owned(),
        label: category.to_owned(),
        selected: current == category,
    }));
    options
}

/// The sort dropdown, with the current order marked.
fn sort_options(current: SortOrder) -> Vec<SelectOption> {
    [
        (SortOrder::Name, "Name (A-Z)"),
        (SortOrder::PriceLow, "Price: Low to High"),
        (SortOrder::PriceHigh, "Price: High to Low"),
        (SortOrder::Rating, "Highest Rated"),
    ]
    .into_iter()
    .map(|(order, label)| SelectOption {
        value: order.as_str().to_owned(),
        label: label.to_owned(),
        selected: order == current,
    })
    .collect()
}

// ============================================================================
// Templates
// ============================================================================

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub customer: Option<Customer>,
    pub vehicle: &'static Vehicle,
    /// The parts after filtering and sorting.
    pub parts: Vec<&'static Part>,
    /// How many parts the vehicle has before filtering.
    pub total: usize,
    /// Echoed search box value so the control keeps its state.
    pub search: String,
    pub category_options: Vec<SelectOption>,
    pub sort_options: Vec<SelectOption>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Display the parts listing for one vehicle.
#[instrument(skip_all, fields(vehicle = %slug))]
pub async fn show(
    OptionalCustomer(customer): OptionalCustomer,
    Path(slug): Path<String>,
    Query(query): Query<ShopQuery>,
) -> Response {
    let Some(vehicle) = data::vehicle_by_slug(&slug) else {
        tracing::debug!("Unknown vehicle slug");
        return (
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                customer,
                message: "We don't stock parts for that vehicle.",
            },
        )
            .into_response();
    };

    let search = query.search.unwrap_or_default();
    let category = query.category.unwrap_or_default();
    let sort = query.sort.as_deref().map(SortOrder::parse).unwrap_or_default();

    let all = data::parts_for_vehicle(vehicle.slug);
    let total = all.len();
    let categories = data::categories(&all);
    let parts = data::filter_and_sort(all, &search, &category, sort);

    ShopTemplate {
        customer,
        vehicle,
        parts,
        total,
        search,
        category_options: category_options(&categories, &category),
        sort_options: sort_options(sort),
    }
    .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_default_to_all() {
        let options = category_options(&["Engine", "Brakes"], "");
        assert_eq!(options.len(), 3);
        assert!(options[0].selected);
        assert_eq!(options[0].value, "all");
        assert!(!options[1].selected);
    }

    #[test]
    fn test_category_options_mark_current() {
        let options = category_options(&["Engine", "Brakes"], "Brakes");
        assert!(!options[0].selected);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "Brakes");
    }

    #[test]
    fn test_sort_options_mark_exactly_one() {
        let options = sort_options(SortOrder::PriceHigh);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "price-high");
    }
}
