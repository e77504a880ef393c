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

use overland_core::SessionToken;

use crate::error::AppError;
use crate::models::AdminUser;
use crate::models::session::keys;

/// How long a login token stays valid. Shorter than the storefront's
/// window: back-office sessions end with the working day.
const TOKEN_TTL_HOURS: i64 = 8;

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

    /// The signed-in admin, if any.
    ///
    /// An admin counts as signed in only when both the login token and the
    /// profile are present, both deserialize, and the token is unexpired.
    /// Any other state (one key missing, token past its expiry, a value that
    /// no longer decodes) is cleaned up here and reads as signed out rather
    /// than as a server error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the backing store cannot be read, or
    /// `SessionError::Save` if stale keys cannot be removed.
    pub async fn current_admin(&self) -> Result<Option<AdminUser>, SessionError> {
        let token = self.read_key::<SessionToken>(keys::ADMIN_TOKEN).await?;
        let admin = self.read_key::<AdminUser>(keys::ADMIN_USER).await?;

        match (token, admin) {
            (KeyState::Present(token), KeyState::Present(admin)) if !token.is_expired() => {
                Ok(Some(admin))
            }
            (KeyState::Missing, KeyState::Missing) => Ok(None),
            _ => {
                // Expired token, a half-written login, or a corrupted value.
                // Drop both halves so the next request starts signed out.
                self.clear_admin().await?;
                Ok(None)
            }
        }
    }

    /// Record a successful login: issue a fresh token and store the profile.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Save` if either key cannot be written.
    pub async fn establish_admin(&self, admin: &AdminUser) -> Result<(), SessionError> {
        let token = SessionToken::issue(Duration::hours(TOKEN_TTL_HOURS));
        self.session
            .insert(keys::ADMIN_TOKEN, &token)
            .await
            .map_err(SessionError::Save)?;
        self.session
            .insert(keys::ADMIN_USER, admin)
            .await
            .map_err(SessionError::Save)
    }

    /// Remove the login token and admin profile.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Save` if removal fails.
    pub async fn clear_admin(&self) -> Result<(), SessionError> {
        self.remove_raw(keys::ADMIN_TOKEN).await?;
        self.remove_raw(keys::ADMIN_USER).await?;
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

    /// Destroy the whole session, cookie included.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Save` if the backing store rejects the delete.
    pub async fn destroy(&self) -> Result<(), SessionError> {
        self.session.flush().await.map_err(SessionError::Save)
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

    use overland_core::{AdminRole, AdminUserId, Email};
    use tower_sessions::MemoryStore;

    use super::*;

    fn store() -> SessionStore {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        SessionStore::new(session)
    }

    fn admin() -> AdminUser {
        AdminUser {
            id: AdminUserId::new(1),
            email: Email::parse("admin@overlandparts.ie").unwrap(),
            name: "Admin User".to_owned(),
            role: AdminRole::Admin,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_login_state_round_trips() {
        let store = store();
        assert!(store.current_admin().await.unwrap().is_none());

        store.establish_admin(&admin()).await.unwrap();
        let current = store.current_admin().await.unwrap().unwrap();
        assert_eq!(current.name, "Admin User");
        assert_eq!(current.role, AdminRole::Admin);

        store.clear_admin().await.unwrap();
        assert!(store.current_admin().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_token_reads_as_signed_out() {
        let store = store();
        let expired = SessionToken::issue(Duration::seconds(-1));
        store
            .session
            .insert(keys::ADMIN_TOKEN, &expired)
            .await
            .unwrap();
        store
            .session
            .insert(keys::ADMIN_USER, &admin())
            .await
            .unwrap();

        assert!(store.current_admin().await.unwrap().is_none());

        // The stale keys are gone, not just ignored
        let token: Option<SessionToken> = store.session.get(keys::ADMIN_TOKEN).await.unwrap();
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_token_without_profile_reads_as_signed_out() {
        let store = store();
        store
            .session
            .insert(keys::ADMIN_TOKEN, &SessionToken::issue(Duration::hours(8)))
            .await
            .unwrap();

        assert!(store.current_admin().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupted_login_reads_as_signed_out_not_error() {
        let store = store();
        // A stale deploy left something unreadable under the profile key
        store
            .session
            .insert(keys::ADMIN_TOKEN, &SessionToken::issue(Duration::hours(8)))
            .await
            .unwrap();
        store
            .session
            .insert(keys::ADMIN_USER, &vec![1, 2, 3])
            .await
            .unwrap();

        assert!(store.current_admin().await.unwrap().is_none());

        // Cleanup removed the unreadable value rather than erroring on it
        let leftover: Option<Vec<i32>> = store.session.get(keys::ADMIN_USER).await.unwrap();
        assert!(leftover.is_none());
    }
}
