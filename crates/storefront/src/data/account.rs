//! Demo data for the customer account area.
//!
//! Orders, addresses, wishlist, payment methods, and rewards are fixed
//! fixtures. Only the profile itself is live data, held by the account
//! registry; everything here just fills out the account pages.

use chrono::NaiveDate;

use overland_core::{Currency, Money, OrderStatus};

/// A past order as the account area lists it.
#[derive(Debug, Clone)]
pub struct AccountOrder {
    pub id: &'static str,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub total: Money,
    pub items: u32,
    pub tracking: Option<&'static str>,
}

/// A saved delivery address.
#[derive(Debug, Clone)]
pub struct Address {
    pub label: &'static str,
    pub recipient: &'static str,
    pub line1: &'static str,
    pub city: &'static str,
    pub postcode: &'static str,
    pub country: &'static str,
    pub phone: &'static str,
    pub is_default: bool,
}

/// A wishlist entry.
#[derive(Debug, Clone)]
pub struct WishlistItem {
    pub name: &'static str,
    pub part_number: &'static str,
    pub price: Money,
    pub image: &'static str,
    pub in_stock: bool,
}

/// A stored card.
#[derive(Debug, Clone)]
pub struct PaymentMethod {
    pub brand: &'static str,
    pub last_four: &'static str,
    pub expires: &'static str,
    pub is_default: bool,
}

/// One line of rewards history.
#[derive(Debug, Clone)]
pub struct RewardEntry {
    pub date: NaiveDate,
    pub description: &'static str,
    /// Positive for points earned, negative for points spent.
    pub points: i32,
}

/// Notification preference toggles.
#[derive(Debug, Clone)]
pub struct NotificationPrefs {
    pub order_updates: bool,
    pub delivery_updates: bool,
    pub promotions: bool,
    pub price_drops: bool,
    pub newsletter: bool,
}

/// The headline numbers on the account overview.
#[derive(Debug, Clone)]
pub struct QuickStats {
    pub orders: u32,
    pub total_spent: Money,
    pub reward_points: u32,
    pub saved_items: u32,
}

/// A recently viewed part teaser.
#[derive(Debug, Clone)]
pub struct RecentlyViewed {
    pub name: &'static str,
    pub price: Money,
    pub image: &'static str,
}

/// Overview stats.
#[must_use]
pub fn quick_stats() -> QuickStats {
    QuickStats {
        orders: 24,
        total_spent: eur(2840_65),
        reward_points: 1420,
        saved_items: 8,
    }
}

/// Order history, newest first.
#[must_use]
pub fn orders() -> Vec<AccountOrder> {
    vec![
        AccountOrder {
            id: "ORD-2024-001",
            placed_on: date(2024, 1, 15),
            status: OrderStatus::Delivered,
            total: eur(234_50),
            items: 3,
            tracking: Some("LR123456789"),
        },
        AccountOrder {
            id: "ORD-2024-002",
            placed_on: date(2024, 1, 10),
            status: OrderStatus::Shipped,
            total: eur(89_99),
            items: 1,
            tracking: Some("LR987654321"),
        },
        AccountOrder {
            id: "ORD-2024-003",
            placed_on: date(2024, 1, 5),
            status: OrderStatus::Processing,
            total: eur(456_78),
            items: 5,
            tracking: None,
        },
    ]
}

/// Saved addresses.
#[must_use]
pub fn addresses() -> Vec<Address> {
    vec![
        Address {
            label: "Home",
            recipient: "John Smith",
            line1: "123 Main Street",
            city: "Dublin",
            postcode: "D01 Y123",
            country: "Ireland",
            phone: "+353 1 234 5678",
            is_default: true,
        },
        Address {
            label: "Work",
            recipient: "John Smith",
            line1: "Unit 7, Riverside Business Park",
            city: "Dublin",
            postcode: "D02 XW40",
            country: "Ireland",
            phone: "+353 1 234 5678",
            is_default: false,
        },
    ]
}

/// Wishlist entries.
#[must_use]
pub fn wishlist() -> Vec<WishlistItem> {
    vec![
        WishlistItem {
            name: "Defender Winch Bumper",
            part_number: "DEF001",
            price: eur(899_99),
            image: "/static/images/winch-bumper.jpg",
            in_stock: true,
        },
        WishlistItem {
            name: "Snorkel Kit",
            part_number: "SS175HF",
            price: eur(449_99),
            image: "/static/images/snorkel-kit.jpg",
            in_stock: true,
        },
        WishlistItem {
            name: "LED Light Bar 40\"",
            part_number: "LED40001",
            price: eur(299_99),
            image: "/static/images/led-light-bar.jpg",
            in_stock: true,
        },
        WishlistItem {
            name: "Headlight Assembly Left",
            part_number: "XBC500040",
            price: eur(189_99),
            image: "/static/images/headlight.jpg",
            in_stock: false,
        },
    ]
}

/// Stored cards.
#[must_use]
pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            brand: "Visa",
            last_four: "4242",
            expires: "12/26",
            is_default: true,
        },
        PaymentMethod {
            brand: "Mastercard",
            last_four: "8210",
            expires: "09/25",
            is_default: false,
        },
    ]
}

/// Rewards history, newest first.
#[must_use]
pub fn reward_history() -> Vec<RewardEntry> {
    vec![
        RewardEntry {
            date: date(2024, 1, 15),
            description: "Order ORD-2024-001",
            points: 235,
        },
        RewardEntry {
            date: date(2024, 1, 10),
            description: "Order ORD-2024-002",
            points: 90,
        },
        RewardEntry {
            date: date(2023, 12, 20),
            description: "Redeemed: €10 off voucher",
            points: -1000,
        },
        RewardEntry {
            date: date(2023, 12, 5),
            description: "Order ORD-2023-089",
            points: 412,
        },
    ]
}

/// Notification preferences.
#[must_use]
pub const fn notification_prefs() -> NotificationPrefs {
    NotificationPrefs {
        order_updates: true,
        delivery_updates: true,
        promotions: false,
        price_drops: true,
        newsletter: false,
    }
}

/// Recently viewed parts for the overview page.
#[must_use]
pub fn recently_viewed() -> Vec<RecentlyViewed> {
    vec![
        RecentlyViewed {
            name: "Premium Brake Pads Set",
            price: eur(89_99),
            image: "/static/images/automotive-brake-pads.png",
        },
        RecentlyViewed {
            name: "LED Headlight Bulbs (Pair)",
            price: eur(79_99),
            image: "/static/images/led-headlight-bulbs.png",
        },
        RecentlyViewed {
            name: "High-Performance Air Filter",
            price: eur(34_99),
            image: "/static/images/car-air-filter.png",
        },
    ]
}

fn eur(cents: i64) -> Money {
    Money::from_cents(cents, Currency::EUR)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_are_newest_first() {
        let orders = orders();
        assert!(orders.windows(2).all(|w| w[0].placed_on >= w[1].placed_on));
    }

    #[test]
    fn test_exactly_one_default_address_and_card() {
        assert_eq!(addresses().iter().filter(|a| a.is_default).count(), 1);
        assert_eq!(payment_methods().iter().filter(|p| p.is_default).count(), 1);
    }

    #[test]
    fn test_stats_match_the_overview_copy() {
        let stats = quick_stats();
        assert_eq!(stats.total_spent.to_string(), "€2840.65");
        assert_eq!(stats.reward_points, 1420);
    }
}
