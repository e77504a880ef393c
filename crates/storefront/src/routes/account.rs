//! Account route handlers.
//!
//! Every handler here requires a signed-in customer. The profile is live
//! data from the account registry; order history, addresses, wishlist,
//! cards, and rewards come from the demo fixtures in [`crate::data::account`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use crate::data::account::{
    AccountOrder, Address, NotificationPrefs, PaymentMethod, QuickStats, RecentlyViewed,
    RewardEntry, WishlistItem, addresses as saved_addresses, notification_prefs, orders as order_history,
    payment_methods as saved_cards, quick_stats, recently_viewed, reward_history, wishlist as wishlist_items,
};
use crate::filters;
use crate::middleware::RequireCustomer;
use crate::models::customer::{Customer, ProfileUpdate};
use crate::routes::auth::MessageQuery;
use crate::session_store::SessionStore;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Profile settings form data.
///
/// Empty fields mean "leave unchanged"; the form never clears a value.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
}

/// Drop empty and whitespace-only form values.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

// =============================================================================
// Messages
// =============================================================================

/// Map a settings `?success=` code to the banner shown above the form.
fn settings_success_message(code: &str) -> &'static str {
    match code {
        "profile" => "Your profile has been updated.",
        _ => "Saved.",
    }
}

/// Map a settings `?error=` code to the banner shown above the form.
fn settings_error_message(code: &str) -> &'static str {
    match code {
        "invalid_date" => "Enter your date of birth as YYYY-MM-DD.",
        "session" => "Your profile was saved but the page may show stale details. Sign in again.",
        _ => "Something went wrong. Please try again.",
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Account overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/overview.html")]
pub struct OverviewTemplate {
    pub customer: Option<Customer>,
    pub active: &'static str,
    pub first_name: String,
    pub stats: QuickStats,
    pub recent_orders: Vec<AccountOrder>,
    pub recently_viewed: Vec<RecentlyViewed>,
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct OrdersTemplate {
    pub customer: Option<Customer>,
    pub active: &'static str,
    pub orders: Vec<AccountOrder>,
}

/// Saved addresses page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/addresses.html")]
pub struct AddressesTemplate {
    pub customer: Option<Customer>,
    pub active: &'static str,
    pub addresses: Vec<Address>,
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/wishlist.html")]
pub struct WishlistTemplate {
    pub customer: Option<Customer>,
    pub active: &'static str,
    pub items: Vec<WishlistItem>,
}

/// Stored cards page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/payment_methods.html")]
pub struct PaymentMethodsTemplate {
    pub customer: Option<Customer>,
    pub active: &'static str,
    pub cards: Vec<PaymentMethod>,
}

/// Rewards page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/rewards.html")]
pub struct RewardsTemplate {
    pub customer: Option<Customer>,
    pub active: &'static str,
    pub balance: u32,
    pub history: Vec<RewardEntry>,
}

/// Notification preferences page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/notifications.html")]
pub struct NotificationsTemplate {
    pub customer: Option<Customer>,
    pub active: &'static str,
    pub prefs: NotificationPrefs,
}

/// Profile settings page template.
///
/// The form prefills are flattened to plain strings here so the template
/// never has to unwrap an `Option` inside an attribute.
#[derive(Template, WebTemplate)]
#[template(path = "account/settings.html")]
pub struct SettingsTemplate {
    pub customer: Option<Customer>,
    pub active: &'static str,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// ISO date (`YYYY-MM-DD`) or empty, matching `<input type="date">`.
    pub date_of_birth: String,
    pub gender: String,
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the account overview.
pub async fn overview(RequireCustomer(customer): RequireCustomer) -> impl IntoResponse {
    OverviewTemplate {
        first_name: customer.first_name.clone(),
        customer: Some(customer),
        active: "overview",
        stats: quick_stats(),
        recent_orders: order_history(),
        recently_viewed: recently_viewed(),
    }
}

/// Display the order history.
pub async fn orders(RequireCustomer(customer): RequireCustomer) -> impl IntoResponse {
    OrdersTemplate {
        customer: Some(customer),
        active: "orders",
        orders: order_history(),
    }
}

/// Display the saved addresses.
pub async fn addresses(RequireCustomer(customer): RequireCustomer) -> impl IntoResponse {
    AddressesTemplate {
        customer: Some(customer),
        active: "addresses",
        addresses: saved_addresses(),
    }
}

/// Display the wishlist.
pub async fn wishlist(RequireCustomer(customer): RequireCustomer) -> impl IntoResponse {
    WishlistTemplate {
        customer: Some(customer),
        active: "wishlist",
        items: wishlist_items(),
    }
}

/// Display the stored cards.
pub async fn payment_methods(RequireCustomer(customer): RequireCustomer) -> impl IntoResponse {
    PaymentMethodsTemplate {
        customer: Some(customer),
        active: "payment-methods",
        cards: saved_cards(),
    }
}

/// Display the rewards balance and history.
pub async fn rewards(RequireCustomer(customer): RequireCustomer) -> impl IntoResponse {
    RewardsTemplate {
        customer: Some(customer),
        active: "rewards",
        balance: quick_stats().reward_points,
        history: reward_history(),
    }
}

/// Display the notification preferences.
pub async fn notifications(RequireCustomer(customer): RequireCustomer) -> impl IntoResponse {
    NotificationsTemplate {
        customer: Some(customer),
        active: "notifications",
        prefs: notification_prefs(),
    }
}

/// Display the profile settings form.
pub async fn settings(
    RequireCustomer(customer): RequireCustomer,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    SettingsTemplate {
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        email: customer.email.to_string(),
        phone: customer.phone.clone().unwrap_or_default(),
        date_of_birth: customer
            .date_of_birth
            .map(|date| date.to_string())
            .unwrap_or_default(),
        gender: customer.gender.clone().unwrap_or_default(),
        customer: Some(customer),
        active: "settings",
        error: query.error.as_deref().map(settings_error_message),
        success: query.success.as_deref().map(settings_success_message),
    }
}

/// Handle the profile settings form.
///
/// Applies the update to the registry, then refreshes the copy held in
/// the session so the very next render shows the new details.
#[instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    store: SessionStore,
    RequireCustomer(customer): RequireCustomer,
    Form(form): Form<ProfileForm>,
) -> Response {
    let date_of_birth = match non_empty(form.date_of_birth) {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                return Redirect::to("/account/settings?error=invalid_date").into_response();
            }
        },
        None => None,
    };

    let update = ProfileUpdate {
        first_name: non_empty(form.first_name),
        last_name: non_empty(form.last_name),
        phone: non_empty(form.phone),
        date_of_birth,
        gender: non_empty(form.gender),
    };

    match state.accounts().update_profile(customer.id, &update) {
        Ok(updated) => {
            if let Err(e) = store.refresh_customer(&updated).await {
                tracing::error!("Failed to refresh session after profile update: {e}");
                return Redirect::to("/account/settings?error=session").into_response();
            }
            Redirect::to("/account/settings?success=profile").into_response()
        }
        Err(e) => {
            tracing::error!("Profile update failed: {e}");
            Redirect::to("/account/settings?error=failed").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_drops_blank_values() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_owned())), None);
        assert_eq!(non_empty(Some("  Jane ".to_owned())), Some("Jane".to_owned()));
    }

    #[test]
    fn test_settings_messages() {
        assert_eq!(
            settings_success_message("profile"),
            "Your profile has been updated."
        );
        assert_eq!(
            settings_error_message("invalid_date"),
            "Enter your date of birth as YYYY-MM-DD."
        );
    }
}
