//! Store settings held in process memory.
//!
//! The settings page edits a single snapshot guarded by a lock. Nothing is
//! written to disk; a restart returns to the defaults, which match what the
//! storefront's content pages advertise.

use std::sync::{PoisonError, RwLock};

use rust_decimal::Decimal;

use overland_core::{Currency, Money};

/// Store identity and contact details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreProfile {
    pub store_name: String,
    pub tagline: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
    pub currency: Currency,
    pub timezone: String,
}

/// Delivery rates and handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySettings {
    /// Orders at or above this subtotal ship free.
    pub free_over: Money,
    pub standard_rate: Money,
    pub express_rate: Money,
    pub international_rate: Money,
    pub click_and_collect: bool,
    pub processing_time: String,
}

/// Which events notify the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSettings {
    pub email_on_new_order: bool,
    pub email_on_low_stock: bool,
    pub email_on_new_customer: bool,
    pub low_stock_threshold: u32,
}

/// The complete settings value, cloned out for rendering and replaced on
/// save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSnapshot {
    pub profile: StoreProfile,
    pub delivery: DeliverySettings,
    pub alerts: AlertSettings,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        let eur = |cents| Money::from_cents(cents, Currency::EUR);
        Self {
            profile: StoreProfile {
                store_name: "Overland Parts".to_owned(),
                tagline: "Land Rover parts and accessories".to_owned(),
                contact_email: "sales@overlandparts.ie".to_owned(),
                phone: "+353 1 456 7890".to_owned(),
                address: "Unit 12, Ballymount Industrial Estate, Dublin 12".to_owned(),
                currency: Currency::EUR,
                timezone: "Europe/Dublin".to_owned(),
            },
            delivery: DeliverySettings {
                free_over: eur(150_00),
                standard_rate: eur(8_95),
                express_rate: eur(12_95),
                international_rate: eur(14_95),
                click_and_collect: true,
                processing_time: "1-2 working days".to_owned(),
            },
            alerts: AlertSettings {
                email_on_new_order: true,
                email_on_low_stock: true,
                email_on_new_customer: false,
                low_stock_threshold: 10,
            },
        }
    }
}

/// In-memory store settings.
///
/// Handlers receive this through [`crate::state::AppState`], so tests can
/// construct one directly and inspect what a save changed.
#[derive(Debug, Default)]
pub struct StoreSettings {
    inner: RwLock<SettingsSnapshot>,
}

impl StoreSettings {
    /// Create a settings store holding the defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Clone out the current settings.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        self.read().clone()
    }

    /// Replace the current settings wholesale.
    pub fn replace(&self, snapshot: SettingsSnapshot) {
        *self.write() = snapshot;
    }

    // Reads vastly outnumber writes and every write is a full replacement,
    // so a poisoned guard still holds a complete value. Recover it.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, SettingsSnapshot> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SettingsSnapshot> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Parse a money amount from a form field, in the store currency.
///
/// # Errors
///
/// Returns the offending input when it is not a non-negative decimal
/// number.
pub fn parse_money(input: &str, currency: Currency) -> Result<Money, String> {
    let trimmed = input.trim();
    let amount: Decimal = trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not a valid amount"))?;
    if amount.is_sign_negative() {
        return Err(format!("'{trimmed}' must not be negative"));
    }
    Ok(Money::new(amount.round_dp(2), currency))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_storefront_copy() {
        let snapshot = SettingsSnapshot::default();
        assert_eq!(snapshot.profile.store_name, "Overland Parts");
        assert_eq!(snapshot.profile.currency, Currency::EUR);
        assert_eq!(
            snapshot.delivery.free_over,
            Money::from_cents(150_00, Currency::EUR)
        );
        assert_eq!(snapshot.alerts.low_stock_threshold, 10);
    }

    #[test]
    fn test_replace_is_visible_to_later_reads() {
        let settings = StoreSettings::with_defaults();
        let mut snapshot = settings.snapshot();
        snapshot.profile.store_name = "Overland Parts & Spares".to_owned();
        snapshot.alerts.email_on_new_customer = true;
        settings.replace(snapshot.clone());

        assert_eq!(settings.snapshot(), snapshot);
    }

    #[test]
    fn test_parse_money() {
        let eur = Currency::EUR;
        assert_eq!(
            parse_money("8.95", eur).unwrap(),
            Money::from_cents(8_95, eur)
        );
        assert_eq!(
            parse_money(" 150 ", eur).unwrap(),
            Money::from_cents(150_00, eur)
        );
        assert!(parse_money("abc", eur).is_err());
        assert!(parse_money("-4", eur).is_err());
    }
}
