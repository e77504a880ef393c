//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Shop
//! GET  /shop/{vehicle}         - Parts for one vehicle (search/category/sort)
//!
//! # Cart (HTMX fragments, with form fallback)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a part (returns count fragment, triggers cart-updated)
//! POST /cart/update            - Set a line quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove a line (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Demo checkout notice
//!
//! # Auth
//! GET  /account/login          - Login page
//! POST /account/login          - Login action
//! GET  /account/register       - Register page
//! POST /account/register       - Register action
//! POST /account/logout         - Logout action
//!
//! # Account (requires login)
//! GET  /account                - Account overview
//! GET  /account/orders         - Order history
//! GET  /account/addresses      - Saved addresses
//! GET  /account/wishlist       - Wishlist
//! GET  /account/payment-methods - Stored cards
//! GET  /account/rewards        - Rewards balance and history
//! GET  /account/notifications  - Notification preferences
//! GET  /account/settings       - Profile settings
//! POST /account/settings/profile - Update profile
//!
//! # Content
//! GET  /pages/{slug}           - Markdown content page
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod home;
pub mod pages;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{api_rate_limiter, auth_rate_limiter};
use crate::state::AppState;

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new().route("/{vehicle}", get(shop::show))
}

/// Create the cart routes router.
///
/// These are hit on every htmx interaction, so they carry the relaxed
/// API rate limit rather than the auth one.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route_layer(api_rate_limiter())
}

/// Create the auth routes router.
///
/// Login and register are the credential-guessing surface, so this
/// router gets the strict rate limit.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
        .route_layer(auth_rate_limiter())
}

/// Create the account routes router.
///
/// Every handler here requires a signed-in customer via the
/// `RequireCustomer` extractor; anonymous requests are redirected to
/// the login page.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::overview))
        .route("/orders", get(account::orders))
        .route("/addresses", get(account::addresses))
        .route("/wishlist", get(account::wishlist))
        .route("/payment-methods", get(account::payment_methods))
        .route("/rewards", get(account::rewards))
        .route("/notifications", get(account::notifications))
        .route("/settings", get(account::settings))
        .route("/settings/profile", post(account::update_profile))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Shop routes
        .nest("/shop", shop_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout notice
        .route("/checkout", get(cart::checkout))
        // Auth + account share the /account prefix; auth paths stay
        // reachable signed out
        .nest("/account", auth_routes().merge(account_routes()))
        // Markdown content pages
        .route("/pages/{slug}", get(pages::show))
}
