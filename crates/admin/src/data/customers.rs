//! Customer records as the customers page lists them.

use std::sync::LazyLock;

use chrono::NaiveDate;

use overland_core::{Currency, CustomerId, CustomerStatus, CustomerTier, Money};

/// One row of the customers table.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub joined: NaiveDate,
    pub last_order: NaiveDate,
    pub orders: u32,
    pub total_spent: Money,
    pub status: CustomerStatus,
    pub tier: CustomerTier,
}

fn eur(cents: i64) -> Money {
    Money::from_cents(cents, Currency::EUR)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

static CUSTOMERS: LazyLock<Vec<CustomerRecord>> = LazyLock::new(|| {
    vec![
        CustomerRecord {
            id: CustomerId::new(1),
            name: "John Smith",
            email: "john@example.com",
            phone: "+353 1 234 5678",
            location: "Dublin, Ireland",
            joined: date(2023, 5, 15),
            last_order: date(2024, 1, 15),
            orders: 8,
            total_spent: eur(1250_45),
            status: CustomerStatus::Active,
            tier: CustomerTier::Regular,
        },
        CustomerRecord {
            id: CustomerId::new(2),
            name: "Sarah Connor",
            email: "sarah@example.com",
            phone: "+353 1 987 6543",
            location: "Cork, Ireland",
            joined: date(2023, 8, 22),
            last_order: date(2024, 1, 14),
            orders: 12,
            total_spent: eur(2840_20),
            status: CustomerStatus::Active,
            tier: CustomerTier::Vip,
        },
        CustomerRecord {
            id: CustomerId::new(3),
            name: "Mike Johnson",
            email: "mike@example.com",
            phone: "+353 1 555 0123",
            location: "Galway, Ireland",
            joined: date(2023, 2, 10),
            last_order: date(2024, 1, 13),
            orders: 5,
            total_spent: eur(890_75),
            status: CustomerStatus::Active,
            tier: CustomerTier::Regular,
        },
        CustomerRecord {
            id: CustomerId::new(4),
            name: "Emma Wilson",
            email: "emma@example.com",
            phone: "+353 1 777 8888",
            location: "Limerick, Ireland",
            joined: date(2023, 11, 3),
            last_order: date(2024, 1, 12),
            orders: 3,
            total_spent: eur(456_30),
            status: CustomerStatus::Active,
            tier: CustomerTier::New,
        },
        CustomerRecord {
            id: CustomerId::new(5),
            name: "David Brown",
            email: "david@example.com",
            phone: "+353 1 444 5555",
            location: "Waterford, Ireland",
            joined: date(2023, 7, 18),
            last_order: date(2023, 12, 20),
            orders: 2,
            total_spent: eur(189_99),
            status: CustomerStatus::Inactive,
            tier: CustomerTier::New,
        },
    ]
});

/// Every customer record, most recently active first.
#[must_use]
pub fn records() -> &'static [CustomerRecord] {
    &CUSTOMERS
}

/// Filter the customers table by search text.
///
/// Matches name, email, or location, case-insensitively. Blank search
/// returns everything.
#[must_use]
pub fn search(term: &str) -> Vec<&'static CustomerRecord> {
    let needle = term.trim().to_lowercase();
    CUSTOMERS
        .iter()
        .filter(|record| {
            needle.is_empty()
                || record.name.to_lowercase().contains(&needle)
                || record.email.to_lowercase().contains(&needle)
                || record.location.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_returns_all() {
        assert_eq!(search("").len(), records().len());
        assert_eq!(search("   ").len(), records().len());
    }

    #[test]
    fn test_search_matches_name_email_location() {
        assert_eq!(search("sarah").len(), 1);
        assert_eq!(search("EXAMPLE.COM").len(), 5);
        assert_eq!(search("cork").len(), 1);
        assert!(search("reykjavik").is_empty());
    }

    #[test]
    fn test_vip_tier_present() {
        assert!(records().iter().any(|r| r.tier == CustomerTier::Vip));
    }
}
