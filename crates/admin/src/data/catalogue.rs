//! The stocked catalogue as the products and categories pages see it.
//!
//! Entries mirror what the storefront sells, with the warehouse-side fields
//! (SKU, stock on hand, listing status) the shop page never shows.

use std::sync::LazyLock;

use overland_core::{CategoryId, Currency, Money, PartId, PartStatus};

/// One row of the products table.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueEntry {
    pub id: PartId,
    pub name: &'static str,
    pub sku: &'static str,
    pub brand: &'static str,
    pub category: &'static str,
    pub price: Money,
    /// Units on hand across the warehouse.
    pub stock: u32,
    pub status: PartStatus,
}

/// One row of the categories table.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub product_count: u32,
    pub is_active: bool,
    pub sort_order: u32,
}

fn eur(cents: i64) -> Money {
    Money::from_cents(cents, Currency::EUR)
}

static CATALOGUE: LazyLock<Vec<CatalogueEntry>> = LazyLock::new(|| {
    vec![
        CatalogueEntry {
            id: PartId::new(1),
            name: "Front Brake Pads Set",
            sku: "SFP000280",
            brand: "Genuine Land Rover",
            category: "Brakes",
            price: eur(89_99),
            stock: 45,
            status: PartStatus::Active,
        },
        CatalogueEntry {
            id: PartId::new(2),
            name: "Air Filter Element",
            sku: "ESR4238",
            brand: "Aftermarket",
            category: "Engine",
            price: eur(34_99),
            stock: 23,
            status: PartStatus::Active,
        },
        CatalogueEntry {
            id: PartId::new(3),
            name: "Headlight Assembly Left",
            sku: "XBC500040",
            brand: "OEM Quality",
            category: "Lighting",
            price: eur(79_99),
            stock: 0,
            status: PartStatus::OutOfStock,
        },
        CatalogueEntry {
            id: PartId::new(4),
            name: "V8 Engine Oil Filter",
            sku: "ERR3340",
            brand: "Mann Filter",
            category: "Engine",
            price: eur(12_99),
            stock: 156,
            status: PartStatus::Active,
        },
        CatalogueEntry {
            id: PartId::new(5),
            name: "Door Handle Exterior",
            sku: "MXC6729",
            brand: "Genuine Land Rover",
            category: "Body",
            price: eur(145_00),
            stock: 8,
            status: PartStatus::LowStock,
        },
        CatalogueEntry {
            id: PartId::new(6),
            name: "Clutch Kit Complete",
            sku: "STC8358",
            brand: "LUK",
            category: "Transmission",
            price: eur(289_99),
            stock: 14,
            status: PartStatus::Active,
        },
        CatalogueEntry {
            id: PartId::new(7),
            name: "Radiator Assembly",
            sku: "PCC500450",
            brand: "Genuine Land Rover",
            category: "Cooling",
            price: eur(215_50),
            stock: 6,
            status: PartStatus::LowStock,
        },
        CatalogueEntry {
            id: PartId::new(8),
            name: "Air Suspension Compressor",
            sku: "LR069691",
            brand: "Genuine Land Rover",
            category: "Suspension",
            price: eur(324_00),
            stock: 11,
            status: PartStatus::Active,
        },
        CatalogueEntry {
            id: PartId::new(9),
            name: "Snorkel Kit",
            sku: "SS175HF",
            brand: "Safari",
            category: "Engine",
            price: eur(189_95),
            stock: 19,
            status: PartStatus::Active,
        },
        CatalogueEntry {
            id: PartId::new(10),
            name: "Rock Sliders Pair",
            sku: "TF540",
            brand: "Terrafirma",
            category: "Protection",
            price: eur(349_00),
            stock: 0,
            status: PartStatus::OutOfStock,
        },
        CatalogueEntry {
            id: PartId::new(11),
            name: "Front Coil Springs Pair",
            sku: "ANR2054",
            brand: "Bearmach",
            category: "Suspension",
            price: eur(94_50),
            stock: 32,
            status: PartStatus::Active,
        },
        CatalogueEntry {
            id: PartId::new(12),
            name: "Roof Rails Black",
            sku: "VPLWR0162",
            brand: "Genuine Land Rover",
            category: "Exterior",
            price: eur(267_00),
            stock: 4,
            status: PartStatus::Draft,
        },
    ]
});

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    vec![
        Category {
            id: CategoryId::new(1),
            name: "Engine",
            slug: "engine",
            description: "Filters, belts, gaskets, and performance engine components",
            product_count: 412,
            is_active: true,
            sort_order: 1,
        },
        Category {
            id: CategoryId::new(2),
            name: "Brakes",
            slug: "brakes",
            description: "Brake pads, discs, calipers, and hydraulics",
            product_count: 186,
            is_active: true,
            sort_order: 2,
        },
        Category {
            id: CategoryId::new(3),
            name: "Suspension",
            slug: "suspension",
            description: "Coil and air suspension, dampers, and steering components",
            product_count: 248,
            is_active: true,
            sort_order: 3,
        },
        Category {
            id: CategoryId::new(4),
            name: "Lighting",
            slug: "lighting",
            description: "Headlights, LED upgrades, and auxiliary lighting",
            product_count: 97,
            is_active: true,
            sort_order: 4,
        },
        Category {
            id: CategoryId::new(5),
            name: "Body",
            slug: "body",
            description: "Panels, handles, mirrors, and trim",
            product_count: 321,
            is_active: true,
            sort_order: 5,
        },
        Category {
            id: CategoryId::new(6),
            name: "Exterior",
            slug: "exterior",
            description: "Roof racks, winch bumpers, and expedition accessories",
            product_count: 154,
            is_active: true,
            sort_order: 6,
        },
        Category {
            id: CategoryId::new(7),
            name: "Protection",
            slug: "protection",
            description: "Rock sliders, diff guards, and underbody protection",
            product_count: 68,
            is_active: true,
            sort_order: 7,
        },
        Category {
            id: CategoryId::new(8),
            name: "Tools",
            slug: "tools",
            description: "Diagnostic tools and workshop equipment",
            product_count: 45,
            is_active: false,
            sort_order: 8,
        },
    ]
});

/// Every catalogue entry, in SKU order.
#[must_use]
pub fn entries() -> &'static [CatalogueEntry] {
    &CATALOGUE
}

/// Every category, in display order.
#[must_use]
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// The distinct category names the products table can filter by.
#[must_use]
pub fn category_names() -> Vec<&'static str> {
    let mut names: Vec<_> = CATALOGUE.iter().map(|entry| entry.category).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Filter the products table by search text, category, and status.
///
/// Search matches name, SKU, or brand, case-insensitively. An empty or
/// `"all"` category/status leaves that axis unfiltered.
#[must_use]
pub fn filter(search: &str, category: &str, status: &str) -> Vec<&'static CatalogueEntry> {
    let needle = search.trim().to_lowercase();
    CATALOGUE
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.name.to_lowercase().contains(&needle)
                || entry.sku.to_lowercase().contains(&needle)
                || entry.brand.to_lowercase().contains(&needle)
        })
        .filter(|entry| category.is_empty() || category == "all" || entry.category == category)
        .filter(|entry| {
            status.is_empty() || status == "all" || entry.status.as_str() == status
        })
        .collect()
}

/// Entries at or below the given stock threshold, emptiest first.
#[must_use]
pub fn low_stock(threshold: u32) -> Vec<&'static CatalogueEntry> {
    let mut low: Vec<_> = CATALOGUE
        .iter()
        .filter(|entry| entry.stock <= threshold && entry.status != PartStatus::Draft)
        .collect();
    low.sort_by_key(|entry| entry.stock);
    low
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_skus_are_unique() {
        let entries = entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.sku, b.sku);
            }
        }
    }

    #[test]
    fn test_search_matches_name_sku_and_brand() {
        assert_eq!(filter("brake", "", "").len(), 1);
        assert_eq!(filter("ERR3340", "all", "all").len(), 1);
        assert!(!filter("land rover", "", "").is_empty());
        assert!(filter("flux capacitor", "", "").is_empty());
    }

    #[test]
    fn test_category_and_status_filters_compose() {
        let engine = filter("", "Engine", "");
        assert!(engine.iter().all(|e| e.category == "Engine"));
        assert_eq!(engine.len(), 3);

        let out = filter("", "all", "out-of-stock");
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|e| e.status == PartStatus::OutOfStock));
    }

    #[test]
    fn test_low_stock_sorted_emptiest_first() {
        let low = low_stock(10);
        assert!(!low.is_empty());
        assert!(low.windows(2).all(|w| w[0].stock <= w[1].stock));
        // Draft entries are not restock candidates
        assert!(low.iter().all(|e| e.status != PartStatus::Draft));
    }

    #[test]
    fn test_category_names_deduplicated() {
        let names = category_names();
        let mut sorted = names.clone();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert!(names.contains(&"Engine"));
    }
}
