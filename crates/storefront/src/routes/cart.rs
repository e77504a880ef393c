//! Cart route handlers.
//!
//! Cart operations use htmx for dynamic updates without full page reloads,
//! with a plain form fallback that redirects back to the cart page. The cart
//! itself lives in the session; prices are snapshotted from the catalogue on
//! the server, so nothing the client posts can change what a part costs.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::{HeaderMap, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use overland_core::{Cart, CartLine, PartId};

use crate::data;
use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::OptionalCustomer;
use crate::models::customer::Customer;
use crate::session_store::SessionStore;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: PartId,
    pub name: String,
    pub part_number: String,
    pub brand: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u32,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            part_number: line.part_number.clone(),
            brand: line.brand.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            price: line.price.to_string(),
            line_total: line.total().to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub part_id: i32,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub part_id: i32,
    /// New quantity; zero or less removes the line.
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub part_id: i32,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub customer: Option<Customer>,
    pub cart: CartView,
}

/// Checkout notice page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/checkout.html")]
pub struct CheckoutTemplate {
    pub customer: Option<Customer>,
    pub cart: CartView,
}

/// Cart items fragment template (for htmx).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for htmx).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Helpers
// =============================================================================

/// Whether the request came from htmx rather than a plain form post.
fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

/// Error response for a failed cart operation.
///
/// htmx swaps get an inline message; plain form posts just land back on
/// the cart page, which re-reads the session.
fn cart_error(headers: &HeaderMap) -> Response {
    if is_htmx(headers) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<span class=\"cart-error\">Something went wrong. Refresh and try again.</span>"),
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

/// Fragment-or-redirect response after a cart mutation.
fn cart_updated(headers: &HeaderMap, cart: &Cart) -> Response {
    if is_htmx(headers) {
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate {
                cart: CartView::from(cart),
            },
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip_all)]
pub async fn show(
    store: SessionStore,
    OptionalCustomer(customer): OptionalCustomer,
) -> impl IntoResponse {
    let cart = match store.load_cart().await {
        Ok(cart) => cart,
        Err(e) => {
            tracing::warn!("Failed to load cart from session: {e}");
            Cart::default()
        }
    };

    CartShowTemplate {
        customer,
        cart: CartView::from(&cart),
    }
}

/// Add a part to the cart.
///
/// Looks the part up in the catalogue and snapshots its current price onto
/// the line. htmx callers get the new count badge plus a `cart-updated`
/// trigger so the page can refresh whatever else shows cart state.
#[instrument(skip(store, headers))]
pub async fn add(store: SessionStore, headers: HeaderMap, Form(form): Form<AddToCartForm>) -> Response {
    let Some(part) = data::find_part(PartId::new(form.part_id)) else {
        tracing::warn!("Add to cart for unknown part {}", form.part_id);
        return if is_htmx(&headers) {
            (
                StatusCode::NOT_FOUND,
                Html("<span class=\"cart-error\">That part is no longer available.</span>"),
            )
                .into_response()
        } else {
            Redirect::to("/cart").into_response()
        };
    };

    if !part.in_stock {
        return if is_htmx(&headers) {
            (
                StatusCode::CONFLICT,
                Html("<span class=\"cart-error\">This part is out of stock.</span>"),
            )
                .into_response()
        } else {
            Redirect::to("/cart").into_response()
        };
    }

    let mut cart = match store.load_cart().await {
        Ok(cart) => cart,
        Err(e) => {
            tracing::error!("Failed to load cart: {e}");
            return cart_error(&headers);
        }
    };

    cart.add(part.to_cart_line(form.quantity.unwrap_or(1)));

    if let Err(e) = store.save_cart(&cart).await {
        tracing::error!("Failed to save cart: {e}");
        return cart_error(&headers);
    }

    add_breadcrumb(
        "cart",
        "Added part to cart",
        Some(&[("part_id", &form.part_id.to_string())]),
    );

    if is_htmx(&headers) {
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartCountTemplate {
                count: cart.item_count(),
            },
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

/// Set the quantity of a cart line. Zero removes it.
#[instrument(skip(store, headers))]
pub async fn update(
    store: SessionStore,
    headers: HeaderMap,
    Form(form): Form<UpdateCartForm>,
) -> Response {
    let mut cart = match store.load_cart().await {
        Ok(cart) => cart,
        Err(e) => {
            tracing::error!("Failed to load cart: {e}");
            return cart_error(&headers);
        }
    };

    cart.set_quantity(PartId::new(form.part_id), form.quantity);

    if let Err(e) = store.save_cart(&cart).await {
        tracing::error!("Failed to save cart: {e}");
        return cart_error(&headers);
    }

    cart_updated(&headers, &cart)
}

/// Remove a line from the cart.
#[instrument(skip(store, headers))]
pub async fn remove(
    store: SessionStore,
    headers: HeaderMap,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let mut cart = match store.load_cart().await {
        Ok(cart) => cart,
        Err(e) => {
            tracing::error!("Failed to load cart: {e}");
            return cart_error(&headers);
        }
    };

    cart.remove(PartId::new(form.part_id));

    if let Err(e) = store.save_cart(&cart).await {
        tracing::error!("Failed to save cart: {e}");
        return cart_error(&headers);
    }

    cart_updated(&headers, &cart)
}

/// Empty the cart.
#[instrument(skip_all)]
pub async fn clear(store: SessionStore, headers: HeaderMap) -> Response {
    let cart = Cart::default();
    if let Err(e) = store.save_cart(&cart).await {
        tracing::error!("Failed to clear cart: {e}");
        return cart_error(&headers);
    }

    cart_updated(&headers, &cart)
}

/// Cart count badge fragment.
///
/// The header badge fetches this on page load and again on every
/// `cart-updated` trigger.
#[instrument(skip_all)]
pub async fn count(store: SessionStore) -> impl IntoResponse {
    let count = match store.load_cart().await {
        Ok(cart) => cart.item_count(),
        Err(e) => {
            tracing::warn!("Failed to load cart for count: {e}");
            0
        }
    };

    CartCountTemplate { count }
}

/// Checkout notice page.
///
/// There is no payment flow; this renders the order summary with a note
/// that checkout is not part of the demo. An empty cart bounces back to
/// the cart page.
#[instrument(skip_all)]
pub async fn checkout(
    store: SessionStore,
    OptionalCustomer(customer): OptionalCustomer,
) -> Response {
    let cart = match store.load_cart().await {
        Ok(cart) => cart,
        Err(e) => {
            tracing::warn!("Failed to load cart for checkout: {e}");
            Cart::default()
        }
    };

    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    CheckoutTemplate {
        customer,
        cart: CartView::from(&cart),
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    use overland_core::{Currency, Money};

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));

        headers.insert("hx-request", HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));
    }

    #[test]
    fn test_cart_view_totals() {
        let mut cart = Cart::new();
        cart.add(CartLine {
            id: PartId::new(1),
            name: "Front Brake Pads Set".to_owned(),
            price: Money::from_cents(45_99, Currency::EUR),
            image: "/static/images/brake-pads.jpg".to_owned(),
            part_number: "SFP000280".to_owned(),
            brand: "Genuine Land Rover".to_owned(),
            quantity: 2,
        });

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.subtotal, "€91.98");
        assert_eq!(view.lines[0].line_total, "€91.98");
        assert_eq!(view.lines[0].price, "€45.99");
    }
}
