//! Session-related types.
//!
//! A signed-in customer occupies two session keys: a bearer token with its
//! expiry window under [`keys::CUSTOMER_TOKEN`], and the serialized profile
//! under [`keys::CUSTOMER_USER`]. Authentication requires both keys present
//! and the token unexpired; anything else reads as signed out, and the stale
//! keys are removed on sight.

/// Session keys for storefront data.
pub mod keys {
    /// Key for the login session token.
    pub const CUSTOMER_TOKEN: &str = "customer_token";

    /// Key for the signed-in customer profile.
    pub const CUSTOMER_USER: &str = "customer_user";

    /// Key for the shopping cart.
    pub const CART: &str = "cart";
}
