//! Typed facade over the tower-sessions session.
//!
//! Route handlers never touch raw session keys. They extract a
//! [`SessionStore`] and go through its methods, which own the key layout,
//! the (de)serialization, and the login-token expiry rules. Acquisition is
//! explicit: if the session layer is missing from the stack, extraction
//! fails with [`SessionError::LayerMissing`] instead of a silent guest view.

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::Duration;
use thiserror::Error;
use tower_sessions::Session;

use overland_core::{Cart, SessionToken};

use crate::error::AppError;
use crate::models::customer::Customer;
use crate::models::session::keys;

/// How long a login token stays valid. Matches the session cookie's
/// inactivity window.
const TOKEN_TTL_DAYS: i64 = 7;

/// Errors from session storage operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session layer is not installed on this route.
    #[error("session layer is not installed")]
    LayerMissing,

    /// Reading a value from the session failed.
    #[error("failed to load session data: {0}")]
    Load(#[source] tower_sessions::session::Error),

    /// Writing a value to the session failed.
    #[error("failed to persist session data: {0}")]
    Save(#[source] tower_sessions::session::Error),
}

/// What a typed read of one session key found.
enum KeyState<T> {
    Present(T),
    Missing,
    /// The key holds a value that no longer deserializes. Treated as
    /// missing, and the caller is expected to remove it.
    Corrupt,
}

/// Handle for the current request's session data.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    /// Wrap an already-extracted session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Load the shopping cart, or an empty cart if none is stored yet.
    ///
    /// A stored cart that no longer deserializes is dropped and replaced
    /// with an empty one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the backing store cannot be read.
    pub async fn load_cart(&self) -> Result<Cart, SessionError> {
        match self.read_key::<Cart>(keys::CART).await? {
            KeyState::Present(cart) => Ok(cart),
            KeyState::Missing => Ok(Cart::default()),
            KeyState::Corrupt => {
                self.remove_raw(keys::CART).await?;
                Ok(Cart::default())
            }
        }
    }

    /// Persist the shopping cart.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Save` if the value cannot be written.
    pub async fn save_cart(&self, cart: &Cart) -> Result<(), SessionError> {
        self.session
            .insert(keys::CART, cart)
            .await
            .map_err(SessionError::Save)
    }

    /// The signed-in customer, if any.
    ///
    /// A customer counts as signed in only when both the login token and the
    /// profile are present, both deserialize, and the token is unexpired.
    /// Any other state (one key missing, token past its expiry, a value that
    /// no longer decodes) is cleaned up here and reads as signed out rather
    /// than as a server error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the backing store cannot be read, or
    /// `SessionError::Save` if stale keys cannot be removed.
    pub async fn current_customer(&self) -> Result<Option<Customer>, SessionError> {
        let token = self.read_key::<SessionToken>(keys::CUSTOMER_TOKEN).await?;
        let customer = self.read_key::<Customer>(keys::CUSTOMER_USER).await?;

        match (token, customer) {
            (KeyState::Present(token), KeyState::Present(customer)) if !token.is_expired() => {
                Ok(Some(customer))
            }
            (KeyState::Missing, KeyState::Missing) => Ok(None),
            _ => {
                // Expired token, a half-written login, or a corrupted value.
                // Drop both halves so the next request starts signed out.
                self.clear_customer().await?;
                Ok(None)
            }
        }
    }

    /// Record a successful login: issue a fresh token and store the profile.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Save` if either key cannot be written.
    pub async fn establish_customer(&self, customer: &Customer) -> Result<(), SessionError> {
        let token = SessionToken::issue(Duration::days(TOKEN_TTL_DAYS));
        self.session
            .insert(keys::CUSTOMER_TOKEN, &token)
            .await
            .map_err(SessionError::Save)?;
        self.session
            .insert(keys::CUSTOMER_USER, customer)
            .await
            .map_err(SessionError::Save)
    }

    /// Replace the stored customer profile, keeping the login token as-is.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Save` if the profile cannot be written.
    pub async fn refresh_customer(&self, customer: &Customer) -> Result<(), SessionError> {
        self.session
            .insert(keys::CUSTOMER_USER, customer)
            .await
            .map_err(SessionError::Save)
    }

    /// Remove the login token and customer profile, leaving the cart alone.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Save` if removal fails.
    pub async fn clear_customer(&self) -> Result<(), SessionError> {
        self.remove_raw(keys::CUSTOMER_TOKEN).await?;
        self.remove_raw(keys::CUSTOMER_USER).await?;
        Ok(())
    }

    // Removal must go through remove_value: the typed remove deserializes
    // the outgoing value, so it cannot clean up a corrupted key.
    async fn remove_raw(&self, key: &str) -> Result<(), SessionError> {
        self.session
            .remove_value(key)
            .await
            .map_err(SessionError::Save)?;
        Ok(())
    }

    // Decode failures are the "corrupted persisted value" case, not an
    // infrastructure failure, so they come back as Corrupt instead of Err.
    async fn read_key<T>(&self, key: &str) -> Result<KeyState<T>, SessionError>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.session.get::<T>(key).await {
            Ok(Some(value)) => Ok(KeyState::Present(value)),
            Ok(None) => Ok(KeyState::Missing),
            Err(tower_sessions::session::Error::SerdeJson(_)) => Ok(KeyState::Corrupt),
            Err(e) => Err(SessionError::Load(e)),
        }
    }
}

impl<S> FromRequestParts<S> for SessionStore
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // SessionManagerLayer puts the session in request extensions
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AppError::Session(SessionError::LayerMissing))?;

        Ok(Self::new(session))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use overland_core::{CartLine, Currency, Money, PartId};
    use tower_sessions::MemoryStore;

    use super::*;

    fn store() -> SessionStore {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        SessionStore::new(session)
    }

    fn customer() -> Customer {
        Customer {
            id: overland_core::CustomerId::new(1),
            email: overland_core::Email::parse("customer@example.com").unwrap(),
            first_name: "John".to_owned(),
            last_name: "Smith".to_owned(),
            phone: None,
            date_of_birth: None,
            gender: None,
            avatar: None,
            is_verified: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_cart_defaults_to_empty() {
        let store = store();
        let cart = store.load_cart().await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_cart_round_trips() {
        let store = store();
        let mut cart = Cart::new();
        cart.add(CartLine {
            id: PartId::new(1),
            name: "Front Brake Pads Set".to_owned(),
            price: Money::from_cents(4599, Currency::EUR),
            image: "/static/images/brake-pads.jpg".to_owned(),
            part_number: "SFP000280".to_owned(),
            brand: "Genuine Land Rover".to_owned(),
            quantity: 2,
        });
        store.save_cart(&cart).await.unwrap();

        let loaded = store.load_cart().await.unwrap();
        assert_eq!(loaded, cart);
        assert_eq!(loaded.item_count(), 2);
    }

    #[tokio::test]
    async fn test_login_state_round_trips() {
        let store = store();
        assert!(store.current_customer().await.unwrap().is_none());

        store.establish_customer(&customer()).await.unwrap();
        let current = store.current_customer().await.unwrap().unwrap();
        assert_eq!(current.full_name(), "John Smith");

        store.clear_customer().await.unwrap();
        assert!(store.current_customer().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_token_reads_as_signed_out() {
        let store = store();
        let expired = SessionToken::issue(Duration::seconds(-1));
        store
            .session
            .insert(keys::CUSTOMER_TOKEN, &expired)
            .await
            .unwrap();
        store
            .session
            .insert(keys::CUSTOMER_USER, &customer())
            .await
            .unwrap();

        assert!(store.current_customer().await.unwrap().is_none());

        // The stale keys are gone, not just ignored
        let token: Option<SessionToken> = store.session.get(keys::CUSTOMER_TOKEN).await.unwrap();
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_profile_without_token_reads_as_signed_out() {
        let store = store();
        store
            .session
            .insert(keys::CUSTOMER_USER, &customer())
            .await
            .unwrap();

        assert!(store.current_customer().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupted_login_reads_as_signed_out_not_error() {
        let store = store();
        // A stale deploy left something unreadable under the token key
        store
            .session
            .insert(keys::CUSTOMER_TOKEN, &"not-a-token")
            .await
            .unwrap();
        store
            .session
            .insert(keys::CUSTOMER_USER, &customer())
            .await
            .unwrap();

        assert!(store.current_customer().await.unwrap().is_none());

        // Cleanup removed the unreadable value rather than erroring on it
        let leftover: Option<String> = store.session.get(keys::CUSTOMER_TOKEN).await.unwrap();
        assert!(leftover.is_none());
    }

    #[tokio::test]
    async fn test_corrupted_cart_resets_to_empty() {
        let store = store();
        store.session.insert(keys::CART, &42_i64).await.unwrap();

        let cart = store.load_cart().await.unwrap();
        assert!(cart.is_empty());

        let leftover: Option<i64> = store.session.get(keys::CART).await.unwrap();
        assert!(leftover.is_none());
    }

    #[tokio::test]
    async fn test_clear_customer_keeps_cart() {
        let store = store();
        store.establish_customer(&customer()).await.unwrap();
        let mut cart = Cart::new();
        cart.add(CartLine {
            id: PartId::new(2),
            name: "Air Filter Element".to_owned(),
            price: Money::from_cents(2850, Currency::EUR),
            image: "/static/images/air-filter.jpg".to_owned(),
            part_number: "ESR4238".to_owned(),
            brand: "Aftermarket".to_owned(),
            quantity: 1,
        });
        store.save_cart(&cart).await.unwrap();

        store.clear_customer().await.unwrap();

        assert!(store.current_customer().await.unwrap().is_none());
        assert_eq!(store.load_cart().await.unwrap().item_count(), 1);
    }
}
