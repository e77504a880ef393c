//! Session middleware configuration for the admin panel.
//!
//! Sets up in-memory sessions using tower-sessions with stricter settings
//! than the storefront: SameSite=Strict and an 8 hour inactivity window,
//! matching the login token's lifetime.

use cookie::Key;
use secrecy::ExposeSecret;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, service::SignedCookie};

use crate::config::AdminConfig;

/// Session cookie name for the admin panel.
pub const SESSION_COOKIE_NAME: &str = "op_admin_session";

/// Session expiry time in seconds (8 hours).
const SESSION_EXPIRY_SECONDS: i64 = 8 * 60 * 60;

/// Create the session layer with an in-memory store and signed cookies.
///
/// Sessions do not survive a restart; admins sign back in after a deploy.
///
/// # Panics
///
/// Panics if the session secret is shorter than 32 bytes. Configuration
/// validation enforces a longer minimum, so a config that loads will not
/// panic here.
#[must_use]
pub fn create_session_layer(config: &AdminConfig) -> SessionManagerLayer<MemoryStore, SignedCookie> {
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
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
        .with_signed(signing_key)
}
