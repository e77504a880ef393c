//! Authentication extractors for route handlers.
//!
//! Both extractors read the signed-in admin through
//! [`SessionStore::current_admin`], so token expiry is enforced in one
//! place: an expired login reads as signed out everywhere.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::AdminUser;
use crate::session_store::{SessionError, SessionStore};

/// Extractor that requires a signed-in admin.
///
/// If nobody is signed in, page requests get a redirect to the login page
/// and API requests get 401 Unauthorized.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdmin(pub AdminUser);

/// Error returned when authentication is required but nobody is signed in.
pub enum AdminRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
    /// The session itself could not be read.
    SessionFailed(AppError),
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::SessionFailed(e) => e.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AdminRejection::SessionFailed(SessionError::LayerMissing.into()))?;

        let admin = SessionStore::new(session)
            .current_admin()
            .await
            .map_err(|e| AdminRejection::SessionFailed(e.into()))?
            .ok_or_else(|| {
                // API requests get a bare 401, everything else goes to login
                let is_api = parts.uri.path().starts_with("/api/");
                if is_api {
                    AdminRejection::Unauthorized
                } else {
                    AdminRejection::RedirectToLogin
                }
            })?;

        Ok(Self(admin))
    }
}

/// Extractor that optionally gets the signed-in admin.
///
/// Unlike `RequireAdmin`, this does not reject the request when nobody is
/// signed in. The login page uses it to bounce an already-authenticated
/// admin straight to the dashboard.
pub struct OptionalAdmin(pub Option<AdminUser>);

impl<S> FromRequestParts<S> for OptionalAdmin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = match parts.extensions.get::<Session>().cloned() {
            Some(session) => SessionStore::new(session)
                .current_admin()
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(admin))
    }
}
