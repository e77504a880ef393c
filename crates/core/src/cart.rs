//! Shopping cart container.
//!
//! The cart is a plain value type: handlers load it from the session, mutate
//! it, and write it back. All derived figures (item count, subtotal) are
//! computed from the lines on demand so the stored payload can never drift
//! out of sync with itself.

use serde::{Deserialize, Serialize};

use crate::types::{Currency, Money, PartId};

/// A single cart line: one part at a quantity.
///
/// Descriptive fields are snapshotted from the catalogue at the moment the
/// part is added. Adding the same part again merges into the existing line
/// and keeps the original snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalogue ID of the part.
    pub id: PartId,
    /// Display name.
    pub name: String,
    /// Unit price at the time the part was added.
    pub price: Money,
    /// Product image path.
    pub image: String,
    /// Manufacturer part number.
    pub part_number: String,
    /// Brand name.
    pub brand: String,
    /// Units of this part in the cart. Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Example
///
/// ```
/// use overland_core::{Cart, CartLine, Currency, Money, PartId};
///
/// let line = |id: i32, cents: i64| CartLine {
///     id: PartId::new(id),
///     name: format!("Part {id}"),
///     price: Money::from_cents(cents, Currency::EUR),
///     image: String::new(),
///     part_number: String::new(),
///     brand: String::new(),
///     quantity: 1,
/// };
///
/// let mut cart = Cart::default();
/// cart.add(line(1, 1000));
/// cart.add(line(1, 1000));
/// cart.add(line(2, 500));
///
/// assert_eq!(cart.lines().len(), 2);
/// assert_eq!(cart.item_count(), 3);
/// assert_eq!(cart.subtotal().to_string(), "€25.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of all line totals.
    ///
    /// An empty cart totals zero euro; a non-empty cart takes its currency
    /// from the first line.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        let currency = self
            .lines
            .first()
            .map_or(Currency::EUR, |line| line.price.currency());
        self.lines
            .iter()
            .fold(Money::zero(currency), |acc, line| acc + line.total())
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same part ID already exists, its quantity grows by
    /// the incoming quantity and its snapshot fields are kept; otherwise the
    /// line is appended. A zero quantity is bumped to 1 so an add is never
    /// silently dropped.
    pub fn add(&mut self, line: CartLine) {
        let quantity = line.quantity.max(1);
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == line.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine { quantity, ..line });
        }
    }

    /// Remove the line for `id`. Removing an absent part is a no-op.
    pub fn remove(&mut self, id: PartId) {
        self.lines.retain(|line| line.id != id);
    }

    /// Set the quantity for `id`.
    ///
    /// A quantity of zero or less removes the line, matching the storefront's
    /// stepper hitting zero. Updating an absent part is a no-op.
    pub fn set_quantity(&mut self, id: PartId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn brake_pads(quantity: u32) -> CartLine {
        CartLine {
            id: PartId::new(1),
            name: "Front Brake Pads Set".to_owned(),
            price: Money::from_cents(1000, Currency::EUR),
            image: "/images/brake-pads.jpg".to_owned(),
            part_number: "SFP000280".to_owned(),
            brand: "Genuine Land Rover".to_owned(),
            quantity,
        }
    }

    fn air_filter(quantity: u32) -> CartLine {
        CartLine {
            id: PartId::new(2),
            name: "Air Filter Element".to_owned(),
            price: Money::from_cents(500, Currency::EUR),
            image: "/images/air-filter.jpg".to_owned(),
            part_number: "ESR4238".to_owned(),
            brand: "Aftermarket".to_owned(),
            quantity,
        }
    }

    #[test]
    fn test_add_merges_repeat_parts_and_sums_totals() {
        let mut cart = Cart::new();
        cart.add(brake_pads(1));
        cart.add(brake_pads(1));
        cart.add(air_filter(1));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), Money::from_cents(2500, Currency::EUR));
    }

    #[test]
    fn test_add_keeps_first_snapshot_on_merge() {
        let mut cart = Cart::new();
        cart.add(brake_pads(1));

        let mut renamed = brake_pads(2);
        renamed.name = "Renamed".to_owned();
        cart.add(renamed);

        let line = cart.lines().first().unwrap();
        assert_eq!(line.name, "Front Brake Pads Set");
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_add_zero_quantity_counts_as_one() {
        let mut cart = Cart::new();
        cart.add(brake_pads(0));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add(brake_pads(1));

        cart.set_quantity(PartId::new(1), 5);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.subtotal(), Money::from_cents(5000, Currency::EUR));
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add(brake_pads(2));
        cart.set_quantity(PartId::new(1), 0);
        assert!(cart.is_empty());

        cart.add(air_filter(2));
        cart.set_quantity(PartId::new(2), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_part_is_noop() {
        let mut cart = Cart::new();
        cart.add(brake_pads(1));
        cart.set_quantity(PartId::new(99), 4);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(brake_pads(1));
        cart.add(air_filter(1));

        cart.remove(PartId::new(1));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().id, PartId::new(2));

        // Absent part: no-op
        cart.remove(PartId::new(99));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(brake_pads(3));
        cart.add(air_filter(1));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero_eur() {
        let cart = Cart::new();
        assert_eq!(cart.subtotal(), Money::zero(Currency::EUR));
    }

    #[test]
    fn test_line_total() {
        let line = brake_pads(3);
        assert_eq!(line.total(), Money::from_cents(3000, Currency::EUR));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add(brake_pads(2));
        cart.add(air_filter(1));

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
