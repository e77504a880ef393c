//! Bearer tokens for signed-in sessions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque session token with an expiry window.
///
/// A token is minted at login and stored in the session next to the signed-in
/// principal. Both halves must be present, and the token unexpired, for the
/// session to count as authenticated; an expired token is treated the same as
/// a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Random token value.
    value: String,
    /// When the token was minted.
    issued_at: DateTime<Utc>,
    /// When the token stops being honoured.
    expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// Mint a fresh token valid for `ttl` from now.
    #[must_use]
    pub fn issue(ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            value: Uuid::new_v4().simple().to_string(),
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// The opaque token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// When the token was minted.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// When the token expires.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token has passed its expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry check against an explicit clock, for tests.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_not_expired() {
        let token = SessionToken::issue(Duration::hours(1));
        assert!(!token.is_expired());
        assert_eq!(token.value().len(), 32);
    }

    #[test]
    fn test_token_expires_at_boundary() {
        let token = SessionToken::issue(Duration::minutes(30));
        assert!(!token.is_expired_at(token.issued_at()));
        assert!(token.is_expired_at(token.expires_at()));
        assert!(token.is_expired_at(token.expires_at() + Duration::seconds(1)));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = SessionToken::issue(Duration::hours(1));
        let b = SessionToken::issue(Duration::hours(1));
        assert_ne!(a.value(), b.value());
    }

    #[test]
    fn test_serde_roundtrip() {
        let token = SessionToken::issue(Duration::hours(1));
        let json = serde_json::to_string(&token).unwrap();
        let parsed: SessionToken = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, token);
    }
}
