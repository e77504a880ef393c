//! The storefront content-page inventory.
//!
//! The storefront renders these pages from its own `content/pages/*.md`
//! tree; the admin lists the same inventory from this fixture rather than
//! reading another crate's files at runtime.

use chrono::NaiveDate;

use overland_core::{PageId, PageStatus};

/// One row of the content pages table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRecord {
    pub id: PageId,
    pub title: &'static str,
    pub slug: &'static str,
    pub status: PageStatus,
    pub author: &'static str,
    pub updated: NaiveDate,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Every content page the storefront serves under `/pages/{slug}`.
#[must_use]
pub fn pages() -> Vec<PageRecord> {
    vec![
        PageRecord {
            id: PageId::new(1),
            title: "About Us",
            slug: "about-us",
            status: PageStatus::Published,
            author: "Admin User",
            updated: date(2024, 1, 10),
        },
        PageRecord {
            id: PageId::new(2),
            title: "Contact Us",
            slug: "contact-us",
            status: PageStatus::Published,
            author: "Admin User",
            updated: date(2024, 1, 8),
        },
        PageRecord {
            id: PageId::new(3),
            title: "Shipping & Returns",
            slug: "shipping-returns",
            status: PageStatus::Published,
            author: "Store Manager",
            updated: date(2023, 12, 18),
        },
        PageRecord {
            id: PageId::new(4),
            title: "Privacy Policy",
            slug: "privacy-policy",
            status: PageStatus::Published,
            author: "Admin User",
            updated: date(2023, 11, 30),
        },
        PageRecord {
            id: PageId::new(5),
            title: "Terms of Service",
            slug: "terms-of-service",
            status: PageStatus::Published,
            author: "Admin User",
            updated: date(2023, 11, 30),
        },
        PageRecord {
            id: PageId::new(6),
            title: "Fitting Guides",
            slug: "fitting-guides",
            status: PageStatus::Draft,
            author: "Store Manager",
            updated: date(2024, 1, 14),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let pages = pages();
        for (i, a) in pages.iter().enumerate() {
            for b in &pages[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn test_published_pages_match_storefront_tree() {
        // Slugs the storefront actually ships under content/pages/
        let live = ["about-us", "contact-us", "shipping-returns", "privacy-policy", "terms-of-service"];
        for slug in live {
            let page = pages().into_iter().find(|p| p.slug == slug);
            assert_eq!(page.map(|p| p.status), Some(PageStatus::Published), "{slug}");
        }
    }
}
