//! Monetary amounts with decimal arithmetic.
//!
//! Prices are stored as [`Decimal`] in the currency's standard unit (euro,
//! not cent) so cart arithmetic never accumulates float error.

use core::fmt;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "\u{20ac}",
            Self::USD => "$",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 three-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
        }
    }
}

/// A monetary amount with its currency.
///
/// ## Examples
///
/// ```
/// use overland_core::{Currency, Money};
///
/// let price = Money::from_cents(4599, Currency::EUR);
/// assert_eq!(price.to_string(), "€45.99");
/// assert_eq!(price.times(2).to_string(), "€91.98");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., euro, not cent).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency: Currency,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create an amount from the smallest currency unit (cents).
    #[must_use]
    pub fn from_cents(cents: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this amount.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency: self.currency,
        }
    }

    /// Whether this amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Add for Money {
    type Output = Self;

    /// Add two amounts.
    ///
    /// Mixed-currency sums are a logic error; the cart only ever holds one
    /// currency, so the left-hand currency wins.
    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.currency, rhs.currency, "mixed-currency addition");
        Self {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency.symbol(), self.amount.round_dp(2))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Money::from_cents(1299, Currency::EUR);
        assert_eq!(price.amount(), Decimal::new(1299, 2));
        assert_eq!(price.currency(), Currency::EUR);
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(Money::from_cents(4599, Currency::EUR).to_string(), "€45.99");
        assert_eq!(Money::from_cents(4599, Currency::USD).to_string(), "$45.99");
        assert_eq!(Money::from_cents(4599, Currency::GBP).to_string(), "£45.99");
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Money::from_cents(500, Currency::EUR).to_string(), "€5.00");
        assert_eq!(Money::from_cents(510, Currency::EUR).to_string(), "€5.10");
    }

    #[test]
    fn test_times() {
        let price = Money::from_cents(1000, Currency::EUR);
        assert_eq!(price.times(3), Money::from_cents(3000, Currency::EUR));
        assert_eq!(price.times(0), Money::zero(Currency::EUR));
    }

    #[test]
    fn test_add() {
        let a = Money::from_cents(2000, Currency::EUR);
        let b = Money::from_cents(500, Currency::EUR);
        assert_eq!(a + b, Money::from_cents(2500, Currency::EUR));
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero(Currency::EUR).is_zero());
        assert!(!Money::from_cents(1, Currency::EUR).is_zero());
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Money::from_cents(8999, Currency::EUR);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
