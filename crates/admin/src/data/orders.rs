//! Order records as the orders page and dashboard list them.

use std::sync::LazyLock;

use chrono::NaiveDate;

use overland_core::{Currency, Money, OrderStatus, PaymentStatus};

/// One row of the orders table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: &'static str,
    pub customer: &'static str,
    pub email: &'static str,
    pub placed_on: NaiveDate,
    pub items: u32,
    pub total: Money,
    pub status: OrderStatus,
    pub payment: PaymentStatus,
}

fn eur(cents: i64) -> Money {
    Money::from_cents(cents, Currency::EUR)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

static ORDERS: LazyLock<Vec<OrderRecord>> = LazyLock::new(|| {
    vec![
        OrderRecord {
            id: "ORD-001",
            customer: "John Smith",
            email: "john@example.com",
            placed_on: date(2024, 1, 15),
            items: 3,
            total: eur(259_97),
            status: OrderStatus::Pending,
            payment: PaymentStatus::Paid,
        },
        OrderRecord {
            id: "ORD-002",
            customer: "Sarah Connor",
            email: "sarah@example.com",
            placed_on: date(2024, 1, 15),
            items: 2,
            total: eur(73_96),
            status: OrderStatus::Processing,
            payment: PaymentStatus::Paid,
        },
        OrderRecord {
            id: "ORD-003",
            customer: "Mike Johnson",
            email: "mike@example.com",
            placed_on: date(2024, 1, 14),
            items: 1,
            total: eur(290_00),
            status: OrderStatus::Shipped,
            payment: PaymentStatus::Paid,
        },
        OrderRecord {
            id: "ORD-004",
            customer: "Emma Wilson",
            email: "emma@example.com",
            placed_on: date(2024, 1, 14),
            items: 4,
            total: eur(159_97),
            status: OrderStatus::Completed,
            payment: PaymentStatus::Paid,
        },
        OrderRecord {
            id: "ORD-005",
            customer: "David Brown",
            email: "david@example.com",
            placed_on: date(2024, 1, 13),
            items: 1,
            total: eur(79_99),
            status: OrderStatus::Cancelled,
            payment: PaymentStatus::Refunded,
        },
        OrderRecord {
            id: "ORD-006",
            customer: "Sarah Connor",
            email: "sarah@example.com",
            placed_on: date(2024, 1, 12),
            items: 2,
            total: eur(456_78),
            status: OrderStatus::Delivered,
            payment: PaymentStatus::Paid,
        },
        OrderRecord {
            id: "ORD-007",
            customer: "John Smith",
            email: "john@example.com",
            placed_on: date(2024, 1, 11),
            items: 1,
            total: eur(123_45),
            status: OrderStatus::Completed,
            payment: PaymentStatus::Paid,
        },
    ]
});

/// Every order record, newest first.
#[must_use]
pub fn records() -> &'static [OrderRecord] {
    &ORDERS
}

/// The most recent orders for the dashboard.
#[must_use]
pub fn recent(count: usize) -> Vec<&'static OrderRecord> {
    ORDERS.iter().take(count).collect()
}

/// Filter the orders table by lifecycle status.
///
/// An empty or `"all"` status returns everything.
#[must_use]
pub fn by_status(status: &str) -> Vec<&'static OrderRecord> {
    ORDERS
        .iter()
        .filter(|order| {
            status.is_empty() || status == "all" || order.status.as_str() == status
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_ids_are_unique() {
        let records = records();
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_records_are_newest_first() {
        assert!(
            records()
                .windows(2)
                .all(|w| w[0].placed_on >= w[1].placed_on)
        );
    }

    #[test]
    fn test_status_filter() {
        assert_eq!(by_status("").len(), records().len());
        assert_eq!(by_status("all").len(), records().len());
        assert_eq!(by_status("completed").len(), 2);
        assert!(by_status("cancelled").iter().all(|o| o.status == OrderStatus::Cancelled));
    }

    #[test]
    fn test_recent_caps_at_count() {
        assert_eq!(recent(5).len(), 5);
        assert_eq!(recent(100).len(), records().len());
    }
}
