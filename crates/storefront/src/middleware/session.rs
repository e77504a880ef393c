//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. Cookies are signed with
//! a key derived from the configured session secret, so a tampered cookie is
//! rejected before any session data is touched.

use cookie::Key;
use secrecy::ExposeSecret;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, service::SignedCookie};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "op_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with an in-memory store and signed cookies.
///
/// Sessions do not survive a restart. Carts and logins are demo state, so
/// losing them on deploy is acceptable.
///
/// # Panics
///
/// Panics if the session secret is shorter than 32 bytes. Configuration
/// validation enforces a longer minimum, so a config that loads will not
/// panic here.
#[must_use]
pub fn create_session_layer(
    config: &StorefrontConfig,
) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let store = MemoryStore::default();

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    let signing_key = Key::derive_from(config.session_secret.expose_secret().as_bytes());

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(signing_key)
}
