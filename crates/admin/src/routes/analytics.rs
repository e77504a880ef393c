//! Analytics route handler.
//!
//! The page is tables rather than charts: monthly revenue, category share,
//! top sellers, and traffic sources, with the headline figures computed
//! from the monthly series.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::data::analytics::{
    self, CategoryShare, Headline, MonthlySales, TopSeller, TrafficSource,
};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;

/// Analytics page template.
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub headline: Headline,
    pub monthly: &'static [MonthlySales],
    pub category_share: &'static [CategoryShare],
    pub top_sellers: Vec<TopSeller>,
    pub traffic: &'static [TrafficSource],
}

/// Display the analytics page.
pub async fn show(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
    AnalyticsTemplate {
        admin,
        active: "analytics",
        headline: analytics::headline(),
        monthly: analytics::monthly_sales(),
        category_share: analytics::category_share(),
        top_sellers: analytics::top_sellers(),
        traffic: analytics::traffic_sources(),
    }
}
