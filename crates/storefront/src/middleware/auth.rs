//! Authentication extractors for route handlers.
//!
//! Both extractors read the signed-in customer through
//! [`SessionStore::current_customer`], so token expiry is enforced in one
//! place: an expired login reads as signed out everywhere.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::customer::Customer;
use crate::session_store::{SessionError, SessionStore};

/// Extractor that requires a signed-in customer.
///
/// If nobody is signed in, page requests get a redirect to the login page
/// and API requests get 401 Unauthorized.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireCustomer(customer): RequireCustomer,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", customer.full_name())
/// }
/// ```
pub struct RequireCustomer(pub Customer);

/// Error returned when authentication is required but nobody is signed in.
pub enum AuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
    /// The session itself could not be read.
    SessionFailed(AppError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/account/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::SessionFailed(e) => e.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireCustomer
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AuthRejection::SessionFailed(SessionError::LayerMissing.into()))?;

        let customer = SessionStore::new(session)
            .current_customer()
            .await
            .map_err(|e| AuthRejection::SessionFailed(e.into()))?
            .ok_or_else(|| {
                // API requests get a bare 401, everything else goes to login
                let is_api = parts.uri.path().starts_with("/api/");
                if is_api {
                    AuthRejection::Unauthorized
                } else {
                    AuthRejection::RedirectToLogin
                }
            })?;

        Ok(Self(customer))
    }
}

/// Extractor that optionally gets the signed-in customer.
///
/// Unlike `RequireCustomer`, this does not reject the request when nobody is
/// signed in. Session read failures also read as signed out here, since the
/// pages using this extractor render fine for guests.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     OptionalCustomer(customer): OptionalCustomer,
/// ) -> impl IntoResponse {
///     match customer {
///         Some(c) => format!("Hello, {}!", c.first_name),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct OptionalCustomer(pub Option<Customer>);

impl<S> FromRequestParts<S> for OptionalCustomer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let customer = match parts.extensions.get::<Session>().cloned() {
            Some(session) => SessionStore::new(session)
                .current_customer()
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(customer))
    }
}
