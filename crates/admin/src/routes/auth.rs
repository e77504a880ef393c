//! Admin authentication route handlers.
//!
//! Login runs against the in-process admin directory. Failures redirect
//! back to the form with an `?error=` code so the page re-renders with an
//! inline message and an empty password field.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::OptionalAdmin;
use crate::services::directory::DirectoryError;
use crate::session_store::SessionStore;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
}

/// Map a login `?error=` code to the message shown above the form.
fn login_error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid email or password.",
        "session" => "We could not sign you in. Please try again.",
        _ => "Something went wrong. Please try again.",
    }
}

/// Display the login page.
///
/// An already-signed-in admin is bounced straight to the dashboard.
pub async fn login_page(
    OptionalAdmin(admin): OptionalAdmin,
    Query(query): Query<MessageQuery>,
) -> Response {
    if admin.is_some() {
        return Redirect::to("/").into_response();
    }

    LoginTemplate {
        error: query.error.as_deref().map(login_error_message),
    }
    .into_response()
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
    match state.directory().login(&form.email, &form.password).await {
        Ok(admin) => {
            if let Err(e) = store.establish_admin(&admin).await {
                tracing::error!("Failed to establish session: {e}");
                return Redirect::to("/login?error=session").into_response();
            }

            set_sentry_user(&admin.id, Some(admin.email.as_str()));
            tracing::info!(admin = %admin.email, role = %admin.role, "Admin signed in");
            Redirect::to("/").into_response()
        }
        Err(
            e @ (DirectoryError::InvalidCredentials
            | DirectoryError::InvalidEmail(_)
            | DirectoryError::UserNotFound),
        ) => {
            tracing::warn!("Admin login rejected: {e}");
            Redirect::to("/login?error=credentials").into_response()
        }
        Err(e) => {
            tracing::error!("Admin login failed: {e}");
            Redirect::to("/login?error=failed").into_response()
        }
    }
}

/// Handle logout.
///
/// Destroys the whole session and returns to the login page.
#[instrument(skip_all)]
pub async fn logout(store: SessionStore) -> Response {
    if let Err(e) = store.clear_admin().await {
        tracing::error!("Failed to clear login state: {e}");
    }
    if let Err(e) = store.destroy().await {
        tracing::error!("Failed to destroy session: {e}");
    }

    clear_sentry_user();
    Redirect::to("/login").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            login_error_message("credentials"),
            "Invalid email or password."
        );
        assert_eq!(
            login_error_message("unknown-code"),
            "Something went wrong. Please try again."
        );
    }
}
