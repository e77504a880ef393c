//! Admin user domain type.
//!
//! The profile is stored in the session next to the login token, so it
//! derives serde. Email comparisons go through [`Email`], which normalises
//! case.

use serde::{Deserialize, Serialize};

use overland_core::{AdminUserId, Email};

// Re-export AdminRole from core for convenience
pub use overland_core::AdminRole;

/// A back-office user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Admin's email address.
    pub email: Email,
    /// Admin's display name.
    pub name: String,
    /// Admin's role/permission level.
    pub role: AdminRole,
    /// Optional avatar image URL.
    pub avatar: Option<String>,
}

impl AdminUser {
    /// Uppercase initials for the header avatar, e.g. "Admin User" -> "AU".
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Whether this user may change store settings.
    #[must_use]
    pub const fn can_manage_settings(&self) -> bool {
        matches!(self.role, AdminRole::Admin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(name: &str, role: AdminRole) -> AdminUser {
        AdminUser {
            id: AdminUserId::new(1),
            email: Email::parse("admin@overlandparts.ie").unwrap(),
            name: name.to_owned(),
            role,
            avatar: None,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("Admin User", AdminRole::Admin).initials(), "AU");
        assert_eq!(user("Ciarán", AdminRole::Admin).initials(), "C");
        assert_eq!(
            user("Anna Maria O'Brien", AdminRole::Manager).initials(),
            "AM"
        );
    }

    #[test]
    fn test_settings_access_by_role() {
        assert!(user("A", AdminRole::Admin).can_manage_settings());
        assert!(!user("M", AdminRole::Manager).can_manage_settings());
    }

    #[test]
    fn test_serde_roundtrip() {
        let admin = user("Admin User", AdminRole::Admin);
        let json = serde_json::to_string(&admin).unwrap();
        let parsed: AdminUser = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, admin);
    }
}
