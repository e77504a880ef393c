//! Session-related types.
//!
//! A signed-in admin occupies two session keys: a bearer token with its
//! expiry window under [`keys::ADMIN_TOKEN`], and the serialized profile
//! under [`keys::ADMIN_USER`]. Authentication requires both keys present and
//! the token unexpired; anything else reads as signed out, and the stale
//! keys are removed on sight.

/// Session keys for admin data.
pub mod keys {
    /// Key for the login session token.
    pub const ADMIN_TOKEN: &str = "admin_token";

    /// Key for the signed-in admin profile.
    pub const ADMIN_USER: &str = "admin_user";
}
