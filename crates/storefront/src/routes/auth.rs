//! Authentication route handlers.
//!
//! Login and registration run against the in-process account registry.
//! Failures redirect back to the form with an `?error=` code so the page
//! can be re-rendered with a message and an empty password field.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::OptionalCustomer;
use crate::models::customer::Customer;
use crate::services::accounts::{AccountError, NewAccount};
use crate::session_store::SessionStore;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub password_confirm: String,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub customer: Option<Customer>,
    pub error: Option<&'static str>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub customer: Option<Customer>,
    pub error: Option<&'static str>,
}

// =============================================================================
// Error Messages
// =============================================================================

/// Map a login `?error=` code to the message shown above the form.
fn login_error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid email or password.",
        "session" => "We could not sign you in. Please try again.",
        _ => "Something went wrong. Please try again.",
    }
}

/// Map a register `?error=` code to the message shown above the form.
fn register_error_message(code: &str) -> &'static str {
    match code {
        "password_mismatch" => "The passwords do not match.",
        "weak_password" => "Password must be at least 8 characters.",
        "email_taken" => "An account with that email already exists.",
        "invalid_email" => "Enter a valid email address.",
        "missing_name" => "Enter your first and last name.",
        "session" => "Your account was created but we could not sign you in. Please log in.",
        _ => "Something went wrong. Please try again.",
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(
    OptionalCustomer(customer): OptionalCustomer,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        customer,
        error: query.error.as_deref().map(login_error_message),
    }
}

/// Handle login form submission.
///
/// Verifies the password against the stored Argon2 hash and establishes
/// the session on success. All credential failures collapse into one
/// error code so the form does not reveal which addresses exist.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    store: SessionStore,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.accounts().login(&form.email, &form.password).await {
        Ok(customer) => {
            if let Err(e) = store.establish_customer(&customer).await {
                tracing::error!("Failed to establish session: {e}");
                return Redirect::to("/account/login?error=session").into_response();
            }

            set_sentry_user(&customer.id, Some(customer.email.as_str()));
            add_breadcrumb("auth", "Customer signed in", None);
            Redirect::to("/account").into_response()
        }
        Err(
            e @ (AccountError::InvalidCredentials
            | AccountError::InvalidEmail(_)
            | AccountError::AccountNotFound),
        ) => {
            tracing::warn!("Login rejected: {e}");
            Redirect::to("/account/login?error=credentials").into_response()
        }
        Err(e) => {
            tracing::error!("Login failed: {e}");
            Redirect::to("/account/login?error=failed").into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(
    OptionalCustomer(customer): OptionalCustomer,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    RegisterTemplate {
        customer,
        error: query.error.as_deref().map(register_error_message),
    }
}

/// Handle registration form submission.
///
/// Creates the account and signs the new customer straight in.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    store: SessionStore,
    Form(form): Form<RegisterForm>,
) -> Response {
    if form.password != form.password_confirm {
        return Redirect::to("/account/register?error=password_mismatch").into_response();
    }
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Redirect::to("/account/register?error=missing_name").into_response();
    }

    let new_account = NewAccount {
        email: &form.email,
        password: &form.password,
        first_name: &form.first_name,
        last_name: &form.last_name,
        phone: form.phone.as_deref(),
    };

    match state.accounts().register(new_account).await {
        Ok(customer) => {
            if let Err(e) = store.establish_customer(&customer).await {
                tracing::error!("Failed to establish session after registration: {e}");
                return Redirect::to("/account/login?error=session").into_response();
            }

            set_sentry_user(&customer.id, Some(customer.email.as_str()));
            add_breadcrumb("auth", "Customer registered", None);
            Redirect::to("/account").into_response()
        }
        Err(AccountError::EmailTaken) => {
            Redirect::to("/account/register?error=email_taken").into_response()
        }
        Err(AccountError::WeakPassword(_)) => {
            Redirect::to("/account/register?error=weak_password").into_response()
        }
        Err(AccountError::InvalidEmail(_)) => {
            Redirect::to("/account/register?error=invalid_email").into_response()
        }
        Err(e) => {
            tracing::error!("Registration failed: {e}");
            Redirect::to("/account/register?error=failed").into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Removes the login token and profile, leaves the cart in the session, and
/// returns to the login page.
#[instrument(skip_all)]
pub async fn logout(store: SessionStore) -> Response {
    if let Err(e) = store.clear_customer().await {
        tracing::error!("Failed to clear login state: {e}");
    }

    clear_sentry_user();
    Redirect::to("/account/login").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(login_error_message("credentials"), "Invalid email or password.");
        assert_eq!(
            login_error_message("anything-else"),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn test_register_error_messages() {
        assert_eq!(register_error_message("password_mismatch"), "The passwords do not match.");
        assert_eq!(
            register_error_message("email_taken"),
            "An account with that email already exists."
        );
        assert_eq!(
            register_error_message("weak_password"),
            "Password must be at least 8 characters."
        );
    }
}
