//! Store settings route handlers.
//!
//! The only live write surface in the back office: the form reads a
//! snapshot from the settings store and saving replaces it wholesale.
//! Managers can view the page but only the admin role can save.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;
use crate::routes::auth::MessageQuery;
use crate::services::settings::{SettingsSnapshot, parse_money};
use crate::state::AppState;

/// Settings form data.
///
/// Checkboxes arrive as `Some("on")` when ticked and are absent otherwise,
/// so every toggle is an `Option`.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub store_name: String,
    pub tagline: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
    pub timezone: String,
    pub free_over: String,
    pub standard_rate: String,
    pub express_rate: String,
    pub international_rate: String,
    pub click_and_collect: Option<String>,
    pub processing_time: String,
    pub email_on_new_order: Option<String>,
    pub email_on_low_stock: Option<String>,
    pub email_on_new_customer: Option<String>,
    pub low_stock_threshold: u32,
}

/// Settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub admin: AdminUser,
    pub active: &'static str,
    pub snapshot: SettingsSnapshot,
    pub can_save: bool,
    /// Money fields flattened to plain amounts for the inputs.
    pub free_over: String,
    pub standard_rate: String,
    pub express_rate: String,
    pub international_rate: String,
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

/// Map a settings `?success=` code to the banner shown above the form.
fn success_message(code: &str) -> &'static str {
    match code {
        "saved" => "Settings saved.",
        _ => "Saved.",
    }
}

/// Map a settings `?error=` code to the banner shown above the form.
fn error_message(code: &str) -> &'static str {
    match code {
        "forbidden" => "Only the admin role can change settings.",
        "invalid_amount" => "Enter delivery rates as non-negative amounts, e.g. 8.95.",
        "missing_name" => "Enter a store name.",
        _ => "Something went wrong. Please try again.",
    }
}

/// Format a money amount for an `<input>` value, without the symbol.
fn plain_amount(money: overland_core::Money) -> String {
    format!("{:.2}", money.amount())
}

/// Display the settings page.
pub async fn show(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let snapshot = state.settings().snapshot();

    SettingsTemplate {
        can_save: admin.can_manage_settings(),
        admin,
        active: "settings",
        free_over: plain_amount(snapshot.delivery.free_over),
        standard_rate: plain_amount(snapshot.delivery.standard_rate),
        express_rate: plain_amount(snapshot.delivery.express_rate),
        international_rate: plain_amount(snapshot.delivery.international_rate),
        snapshot,
        error: query.error.as_deref().map(error_message),
        success: query.success.as_deref().map(success_message),
    }
}

/// Handle the settings form.
///
/// Builds a fresh snapshot from the form and replaces the stored one.
/// The currency stays fixed; the shop trades in euro.
#[instrument(skip_all)]
pub async fn save(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<SettingsForm>,
) -> Response {
    if !admin.can_manage_settings() {
        tracing::warn!(admin = %admin.email, "Settings save rejected for manager role");
        return Redirect::to("/settings?error=forbidden").into_response();
    }
    if form.store_name.trim().is_empty() {
        return Redirect::to("/settings?error=missing_name").into_response();
    }

    let mut snapshot = state.settings().snapshot();
    let currency = snapshot.profile.currency;

    let rates = [
        &form.free_over,
        &form.standard_rate,
        &form.express_rate,
        &form.international_rate,
    ]
    .map(|raw| parse_money(raw, currency));
    let [free_over, standard_rate, express_rate, international_rate] = match rates {
        [Ok(a), Ok(b), Ok(c), Ok(d)] => [a, b, c, d],
        _ => return Redirect::to("/settings?error=invalid_amount").into_response(),
    };

    snapshot.profile.store_name = form.store_name.trim().to_owned();
    snapshot.profile.tagline = form.tagline.trim().to_owned();
    snapshot.profile.contact_email = form.contact_email.trim().to_owned();
    snapshot.profile.phone = form.phone.trim().to_owned();
    snapshot.profile.address = form.address.trim().to_owned();
    snapshot.profile.timezone = form.timezone.trim().to_owned();

    snapshot.delivery.free_over = free_over;
    snapshot.delivery.standard_rate = standard_rate;
    snapshot.delivery.express_rate = express_rate;
    snapshot.delivery.international_rate = international_rate;
    snapshot.delivery.click_and_collect = form.click_and_collect.is_some();
    snapshot.delivery.processing_time = form.processing_time.trim().to_owned();

    snapshot.alerts.email_on_new_order = form.email_on_new_order.is_some();
    snapshot.alerts.email_on_low_stock = form.email_on_low_stock.is_some();
    snapshot.alerts.email_on_new_customer = form.email_on_new_customer.is_some();
    snapshot.alerts.low_stock_threshold = form.low_stock_threshold;

    state.settings().replace(snapshot);
    tracing::info!(admin = %admin.email, "Store settings updated");
    Redirect::to("/settings?success=saved").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use overland_core::{Currency, Money};

    #[test]
    fn test_plain_amount_has_no_symbol() {
        assert_eq!(plain_amount(Money::from_cents(8_95, Currency::EUR)), "8.95");
        assert_eq!(
            plain_amount(Money::from_cents(150_00, Currency::EUR)),
            "150.00"
        );
    }

    #[test]
    fn test_settings_messages() {
        assert_eq!(success_message("saved"), "Settings saved.");
        assert_eq!(
            error_message("forbidden"),
            "Only the admin role can change settings."
        );
    }
}
