//! Customer domain types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use overland_core::{CustomerId, Email};

/// A storefront customer.
///
/// The whole profile is stored in the session after login so that the header
/// and account pages can render without another lookup. Keep this small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Customer's email address.
    pub email: Email,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number, if provided.
    pub phone: Option<String>,
    /// Date of birth, if provided.
    pub date_of_birth: Option<NaiveDate>,
    /// Self-described gender, if provided.
    pub gender: Option<String>,
    /// Avatar image path, if set.
    pub avatar: Option<String>,
    /// Whether the email has been verified.
    pub is_verified: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Full display name, e.g. "John Smith".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A partial profile update.
///
/// Only the fields that are `Some` are applied; everything else keeps its
/// current value. Clearing a field is not supported from the settings form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// New gender.
    pub gender: Option<String>,
}

impl ProfileUpdate {
    /// Apply this update to a customer, field by field.
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(first_name) = &self.first_name {
            customer.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &self.last_name {
            customer.last_name.clone_from(last_name);
        }
        if let Some(phone) = &self.phone {
            customer.phone = Some(phone.clone());
        }
        if let Some(date_of_birth) = self.date_of_birth {
            customer.date_of_birth = Some(date_of_birth);
        }
        if let Some(gender) = &self.gender {
            customer.gender = Some(gender.clone());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: CustomerId::new(1),
            email: Email::parse("customer@example.com").unwrap(),
            first_name: "John".to_owned(),
            last_name: "Smith".to_owned(),
            phone: Some("+353 1 234 5678".to_owned()),
            date_of_birth: None,
            gender: None,
            avatar: None,
            is_verified: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(customer().full_name(), "John Smith");
    }

    #[test]
    fn test_profile_update_merges_only_set_fields() {
        let mut c = customer();
        let update = ProfileUpdate {
            first_name: Some("Jane".to_owned()),
            phone: Some("+353 1 555 0000".to_owned()),
            ..ProfileUpdate::default()
        };
        update.apply_to(&mut c);

        assert_eq!(c.first_name, "Jane");
        assert_eq!(c.last_name, "Smith");
        assert_eq!(c.phone.as_deref(), Some("+353 1 555 0000"));
        assert!(c.gender.is_none());
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut c = customer();
        let before = c.clone();
        ProfileUpdate::default().apply_to(&mut c);
        assert_eq!(c, before);
    }
}
