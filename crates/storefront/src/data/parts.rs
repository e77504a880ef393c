//! The parts catalogue.
//!
//! Each part belongs to one vehicle model, except the featured parts shown
//! on the home page, which float free of any model. Prices are what the
//! shop charges: cart handlers look parts up by ID here and snapshot the
//! price server-side, ignoring whatever the client claims.

use std::sync::LazyLock;

use overland_core::{CartLine, Currency, Money, PartId};

use super::vehicles::slugs;

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub id: PartId,
    pub name: &'static str,
    pub part_number: &'static str,
    pub brand: &'static str,
    pub category: &'static str,
    pub price: Money,
    /// The crossed-out "was" price, when the part is on offer.
    pub original_price: Option<Money>,
    pub image: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub in_stock: bool,
    /// Vehicle slug this part fits. `None` marks a home-page featured part.
    pub vehicle: Option<&'static str>,
    /// Home-page badge ("Best Seller", "New", "Sale").
    pub badge: Option<&'static str>,
}

impl Part {
    /// Snapshot this part into a cart line at the current catalogue price.
    #[must_use]
    pub fn to_cart_line(&self, quantity: u32) -> CartLine {
        CartLine {
            id: self.id,
            name: self.name.to_owned(),
            price: self.price,
            image: self.image.to_owned(),
            part_number: self.part_number.to_owned(),
            brand: self.brand.to_owned(),
            quantity,
        }
    }

    /// Percentage off, when an original price is present.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        use rust_decimal::prelude::ToPrimitive;

        let was = self.original_price?.amount();
        if was <= rust_decimal::Decimal::ZERO {
            return None;
        }
        let off = (was - self.price.amount()) / was * rust_decimal::Decimal::ONE_HUNDRED;
        off.round().to_u32()
    }
}

/// How the shop page orders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Alphabetical by name (the default).
    #[default]
    Name,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Best rated first.
    Rating,
}

impl SortOrder {
    /// Parse a query-string value. Unknown values fall back to name order.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            _ => Self::Name,
        }
    }

    /// The query-string value for this order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }
}

/// All parts a vehicle model's shop page lists, in catalogue order.
#[must_use]
pub fn parts_for_vehicle(slug: &str) -> Vec<&'static Part> {
    catalogue()
        .iter()
        .filter(|p| p.vehicle == Some(slug))
        .collect()
}

/// The featured parts shown on the home page.
#[must_use]
pub fn featured_parts() -> Vec<&'static Part> {
    catalogue().iter().filter(|p| p.vehicle.is_none()).collect()
}

/// Look up any part (catalogue or featured) by ID.
#[must_use]
pub fn find_part(id: PartId) -> Option<&'static Part> {
    catalogue().iter().find(|p| p.id == id)
}

/// The whole catalogue, featured parts included.
#[must_use]
pub fn all_parts() -> &'static [Part] {
    catalogue()
}

/// The distinct categories among `parts`, in first-seen order.
#[must_use]
pub fn categories(parts: &[&'static Part]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for part in parts {
        if !seen.contains(&part.category) {
            seen.push(part.category);
        }
    }
    seen
}

/// Apply the shop page's search box, category filter, and sort order.
///
/// The search matches case-insensitively against part names. A category of
/// `"all"` (or empty) passes everything.
#[must_use]
pub fn filter_and_sort(
    parts: Vec<&'static Part>,
    search: &str,
    category: &str,
    sort: SortOrder,
) -> Vec<&'static Part> {
    let needle = search.trim().to_lowercase();

    let mut matched: Vec<&'static Part> = parts
        .into_iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| category.is_empty() || category == "all" || p.category == category)
        .collect();

    match sort {
        SortOrder::Name => matched.sort_by(|a, b| a.name.cmp(b.name)),
        SortOrder::PriceLow => matched.sort_by(|a, b| a.price.amount().cmp(&b.price.amount())),
        SortOrder::PriceHigh => matched.sort_by(|a, b| b.price.amount().cmp(&a.price.amount())),
        SortOrder::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    matched
}

fn catalogue() -> &'static [Part] {
    &CATALOGUE
}

fn eur(cents: i64) -> Money {
    Money::from_cents(cents, Currency::EUR)
}

static CATALOGUE: LazyLock<Vec<Part>> = LazyLock::new(|| {
    vec![
        // --- Series 2, 2A & 3 Defender ---
        Part {
            id: PartId::new(1),
            name: "Front Brake Pads Set",
            part_number: "SFP000280",
            brand: "Genuine Land Rover",
            category: "Brakes",
            price: eur(45_99),
            original_price: Some(eur(59_99)),
            image: "/static/images/brake-pads.jpg",
            rating: 4.8,
            reviews: 124,
            in_stock: true,
            vehicle: Some(slugs::SERIES_DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(2),
            name: "Air Filter Element",
            part_number: "ESR4238",
            brand: "Aftermarket",
            category: "Engine",
            price: eur(28_50),
            original_price: None,
            image: "/static/images/air-filter.jpg",
            rating: 4.6,
            reviews: 89,
            in_stock: true,
            vehicle: Some(slugs::SERIES_DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(3),
            name: "Headlight Assembly Left",
            part_number: "XBC500040",
            brand: "OEM Quality",
            category: "Lighting",
            price: eur(189_99),
            original_price: Some(eur(249_99)),
            image: "/static/images/headlight.jpg",
            rating: 4.9,
            reviews: 67,
            in_stock: false,
            vehicle: Some(slugs::SERIES_DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(4),
            name: "Door Handle Exterior",
            part_number: "MXC6729",
            brand: "Genuine Land Rover",
            category: "Body",
            price: eur(34_99),
            original_price: None,
            image: "/static/images/door-handle.jpg",
            rating: 4.7,
            reviews: 45,
            in_stock: true,
            vehicle: Some(slugs::SERIES_DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(101),
            name: "Clutch Kit Complete",
            part_number: "STC8358",
            brand: "LUK",
            category: "Transmission",
            price: eur(299_99),
            original_price: None,
            image: "/static/images/clutch-kit.jpg",
            rating: 4.9,
            reviews: 78,
            in_stock: true,
            vehicle: Some(slugs::SERIES_DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(102),
            name: "Radiator Assembly",
            part_number: "PCC500450",
            brand: "Genuine Land Rover",
            category: "Cooling",
            price: eur(189_50),
            original_price: Some(eur(229_99)),
            image: "/static/images/radiator.jpg",
            rating: 4.6,
            reviews: 92,
            in_stock: true,
            vehicle: Some(slugs::SERIES_DEFENDER),
            badge: None,
        },
        // --- Land Rover Defender ---
        Part {
            id: PartId::new(5),
            name: "Defender Winch Bumper",
            part_number: "DEF001",
            brand: "Aftermarket",
            category: "Exterior",
            price: eur(899_99),
            original_price: None,
            image: "/static/images/winch-bumper.jpg",
            rating: 4.9,
            reviews: 156,
            in_stock: true,
            vehicle: Some(slugs::DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(6),
            name: "LED Light Bar 40\"",
            part_number: "LED40001",
            brand: "Premium",
            category: "Lighting",
            price: eur(299_99),
            original_price: Some(eur(399_99)),
            image: "/static/images/led-light-bar.jpg",
            rating: 4.8,
            reviews: 203,
            in_stock: true,
            vehicle: Some(slugs::DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(103),
            name: "Snorkel Kit",
            part_number: "SS175HF",
            brand: "Safari",
            category: "Engine",
            price: eur(449_99),
            original_price: None,
            image: "/static/images/snorkel-kit.jpg",
            rating: 4.7,
            reviews: 134,
            in_stock: true,
            vehicle: Some(slugs::DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(104),
            name: "Rock Sliders Pair",
            part_number: "TF540",
            brand: "Terrafirma",
            category: "Protection",
            price: eur(599_99),
            original_price: None,
            image: "/static/images/rock-sliders.jpg",
            rating: 4.8,
            reviews: 89,
            in_stock: true,
            vehicle: Some(slugs::DEFENDER),
            badge: None,
        },
        // --- New Defender from 2020 ---
        Part {
            id: PartId::new(201),
            name: "Air Suspension Compressor",
            part_number: "LR069691",
            brand: "Genuine Land Rover",
            category: "Suspension",
            price: eur(1299_99),
            original_price: None,
            image: "/static/images/air-suspension.jpg",
            rating: 4.9,
            reviews: 45,
            in_stock: true,
            vehicle: Some(slugs::NEW_DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(202),
            name: "Infotainment Screen Protector",
            part_number: "DEF2020SP",
            brand: "Premium",
            category: "Interior",
            price: eur(29_99),
            original_price: None,
            image: "/static/images/screen-protector.jpg",
            rating: 4.5,
            reviews: 167,
            in_stock: true,
            vehicle: Some(slugs::NEW_DEFENDER),
            badge: None,
        },
        Part {
            id: PartId::new(203),
            name: "Roof Rails Black",
            part_number: "VPLWR0162",
            brand: "Genuine Land Rover",
            category: "Exterior",
            price: eur(399_99),
            original_price: Some(eur(499_99)),
            image: "/static/images/roof-rails.jpg",
            rating: 4.8,
            reviews: 78,
            in_stock: true,
            vehicle: Some(slugs::NEW_DEFENDER),
            badge: None,
        },
        // --- Discovery 1 ---
        Part {
            id: PartId::new(301),
            name: "V8 Engine Oil Filter",
            part_number: "ERR3340",
            brand: "Mann Filter",
            category: "Engine",
            price: eur(12_99),
            original_price: None,
            image: "/static/images/oil-filter.jpg",
            rating: 4.7,
            reviews: 234,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_1),
            badge: None,
        },
        Part {
            id: PartId::new(302),
            name: "Front Coil Springs Pair",
            part_number: "ANR2054",
            brand: "Bearmach",
            category: "Suspension",
            price: eur(89_99),
            original_price: None,
            image: "/static/images/coil-springs.jpg",
            rating: 4.6,
            reviews: 156,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_1),
            badge: None,
        },
        // --- Discovery 2 ---
        Part {
            id: PartId::new(401),
            name: "ACE Pump Rebuild Kit",
            part_number: "ANR6502",
            brand: "Dunlop",
            category: "Suspension",
            price: eur(199_99),
            original_price: None,
            image: "/static/images/ace-pump.jpg",
            rating: 4.8,
            reviews: 67,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_2),
            badge: None,
        },
        Part {
            id: PartId::new(402),
            name: "Sunroof Motor",
            part_number: "CUR000010",
            brand: "Genuine Land Rover",
            category: "Interior",
            price: eur(149_99),
            original_price: Some(eur(199_99)),
            image: "/static/images/sunroof-motor.jpg",
            rating: 4.5,
            reviews: 43,
            in_stock: false,
            vehicle: Some(slugs::DISCOVERY_2),
            badge: None,
        },
        // --- Discovery 3 ---
        Part {
            id: PartId::new(501),
            name: "Air Suspension Bag Front",
            part_number: "RNB000740",
            brand: "Dunlop",
            category: "Suspension",
            price: eur(299_99),
            original_price: None,
            image: "/static/images/air-bag.jpg",
            rating: 4.9,
            reviews: 89,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_3),
            badge: None,
        },
        Part {
            id: PartId::new(502),
            name: "Terrain Response Switch",
            part_number: "YUD501220",
            brand: "Genuine Land Rover",
            category: "Electronics",
            price: eur(89_99),
            original_price: None,
            image: "/static/images/terrain-switch.jpg",
            rating: 4.6,
            reviews: 124,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_3),
            badge: None,
        },
        // --- Discovery 4 ---
        Part {
            id: PartId::new(601),
            name: "Timing Chain Kit",
            part_number: "LR032593",
            brand: "Genuine Land Rover",
            category: "Engine",
            price: eur(449_99),
            original_price: None,
            image: "/static/images/timing-chain.jpg",
            rating: 4.8,
            reviews: 78,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_4),
            badge: None,
        },
        Part {
            id: PartId::new(602),
            name: "Parking Brake Module",
            part_number: "LR024292",
            brand: "Continental",
            category: "Brakes",
            price: eur(599_99),
            original_price: Some(eur(799_99)),
            image: "/static/images/parking-brake.jpg",
            rating: 4.7,
            reviews: 56,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_4),
            badge: None,
        },
        // --- Discovery 5 ---
        Part {
            id: PartId::new(701),
            name: "Adaptive Headlight Unit",
            part_number: "LR032661",
            brand: "Genuine Land Rover",
            category: "Lighting",
            price: eur(899_99),
            original_price: None,
            image: "/static/images/adaptive-headlight.jpg",
            rating: 4.9,
            reviews: 34,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_5),
            badge: None,
        },
        Part {
            id: PartId::new(702),
            name: "Tailgate Strut",
            part_number: "LR072216",
            brand: "Stabilus",
            category: "Body",
            price: eur(79_99),
            original_price: None,
            image: "/static/images/tailgate-strut.jpg",
            rating: 4.6,
            reviews: 145,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_5),
            badge: None,
        },
        // --- Discovery Sport ---
        Part {
            id: PartId::new(801),
            name: "Turbocharger",
            part_number: "LR037700",
            brand: "Garrett",
            category: "Engine",
            price: eur(1299_99),
            original_price: Some(eur(1599_99)),
            image: "/static/images/turbocharger.jpg",
            rating: 4.8,
            reviews: 67,
            in_stock: true,
            vehicle: Some(slugs::DISCOVERY_SPORT),
            badge: None,
        },
        Part {
            id: PartId::new(802),
            name: "Panoramic Roof Motor",
            part_number: "LR051377",
            brand: "Genuine Land Rover",
            category: "Interior",
            price: eur(399_99),
            original_price: None,
            image: "/static/images/panoramic-motor.jpg",
            rating: 4.5,
            reviews: 89,
            in_stock: false,
            vehicle: Some(slugs::DISCOVERY_SPORT),
            badge: None,
        },
        // --- Range Rover Sport 06-09 ---
        Part {
            id: PartId::new(901),
            name: "Supercharger Belt",
            part_number: "LR009518",
            brand: "Gates",
            category: "Engine",
            price: eur(89_99),
            original_price: None,
            image: "/static/images/supercharger-belt.jpg",
            rating: 4.7,
            reviews: 156,
            in_stock: true,
            vehicle: Some(slugs::RR_SPORT_06_09),
            badge: None,
        },
        Part {
            id: PartId::new(902),
            name: "Air Suspension Height Sensor",
            part_number: "LR020159",
            brand: "Genuine Land Rover",
            category: "Suspension",
            price: eur(199_99),
            original_price: None,
            image: "/static/images/height-sensor.jpg",
            rating: 4.8,
            reviews: 78,
            in_stock: true,
            vehicle: Some(slugs::RR_SPORT_06_09),
            badge: None,
        },
        // --- Range Rover Sport 09-13 ---
        Part {
            id: PartId::new(1001),
            name: "Diesel Particulate Filter",
            part_number: "LR011279",
            brand: "Genuine Land Rover",
            category: "Exhaust",
            price: eur(899_99),
            original_price: Some(eur(1199_99)),
            image: "/static/images/dpf-filter.jpg",
            rating: 4.6,
            reviews: 45,
            in_stock: true,
            vehicle: Some(slugs::RR_SPORT_09_13),
            badge: None,
        },
        Part {
            id: PartId::new(1002),
            name: "Command Driving Position",
            part_number: "LR032542",
            brand: "Genuine Land Rover",
            category: "Interior",
            price: eur(299_99),
            original_price: None,
            image: "/static/images/command-position.jpg",
            rating: 4.9,
            reviews: 23,
            in_stock: true,
            vehicle: Some(slugs::RR_SPORT_09_13),
            badge: None,
        },
        // --- Range Rover Sport L494 ---
        Part {
            id: PartId::new(1101),
            name: "Active Exhaust Valve",
            part_number: "LR051636",
            brand: "Genuine Land Rover",
            category: "Exhaust",
            price: eur(599_99),
            original_price: None,
            image: "/static/images/exhaust-valve.jpg",
            rating: 4.8,
            reviews: 67,
            in_stock: true,
            vehicle: Some(slugs::RR_SPORT_L494),
            badge: None,
        },
        Part {
            id: PartId::new(1102),
            name: "Wade Sensing Module",
            part_number: "LR072588",
            brand: "Genuine Land Rover",
            category: "Electronics",
            price: eur(399_99),
            original_price: Some(eur(499_99)),
            image: "/static/images/wade-sensing.jpg",
            rating: 4.7,
            reviews: 34,
            in_stock: true,
            vehicle: Some(slugs::RR_SPORT_L494),
            badge: None,
        },
        // --- Home page featured parts ---
        Part {
            id: PartId::new(9001),
            name: "Premium Brake Pads Set",
            part_number: "BP-001",
            brand: "AutoPro",
            category: "Brakes",
            price: eur(89_99),
            original_price: Some(eur(119_99)),
            image: "/static/images/automotive-brake-pads.png",
            rating: 4.8,
            reviews: 124,
            in_stock: true,
            vehicle: None,
            badge: Some("Best Seller"),
        },
        Part {
            id: PartId::new(9002),
            name: "High-Performance Air Filter",
            part_number: "AF-002",
            brand: "FilterMax",
            category: "Engine",
            price: eur(34_99),
            original_price: None,
            image: "/static/images/car-air-filter.png",
            rating: 4.6,
            reviews: 89,
            in_stock: true,
            vehicle: None,
            badge: Some("New"),
        },
        Part {
            id: PartId::new(9003),
            name: "LED Headlight Bulbs (Pair)",
            part_number: "LED-003",
            brand: "BrightBeam",
            category: "Lighting",
            price: eur(79_99),
            original_price: Some(eur(99_99)),
            image: "/static/images/led-headlight-bulbs.png",
            rating: 4.9,
            reviews: 203,
            in_stock: true,
            vehicle: None,
            badge: Some("Sale"),
        },
        Part {
            id: PartId::new(9004),
            name: "Engine Oil Filter",
            part_number: "OF-004",
            brand: "PureFlo",
            category: "Engine",
            price: eur(12_99),
            original_price: None,
            image: "/static/images/engine-oil-filter.png",
            rating: 4.7,
            reviews: 156,
            in_stock: true,
            vehicle: None,
            badge: None,
        },
    ]
});

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::super::vehicles::vehicles;
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for part in catalogue() {
            assert!(seen.insert(part.id), "duplicate part id {:?}", part.id);
        }
    }

    #[test]
    fn test_every_vehicle_has_parts() {
        for vehicle in vehicles() {
            assert!(
                !parts_for_vehicle(vehicle.slug).is_empty(),
                "no parts for {}",
                vehicle.slug
            );
        }
    }

    #[test]
    fn test_series_defender_listing() {
        let parts = parts_for_vehicle("series-2-2a-3-defender");
        assert_eq!(parts.len(), 6);
        assert_eq!(parts[0].name, "Front Brake Pads Set");
        assert_eq!(parts[0].price.to_string(), "€45.99");
    }

    #[test]
    fn test_featured_parts_have_no_vehicle() {
        let featured = featured_parts();
        assert_eq!(featured.len(), 4);
        assert!(featured.iter().all(|p| p.vehicle.is_none()));
        assert_eq!(featured[0].badge, Some("Best Seller"));
    }

    #[test]
    fn test_find_part_covers_featured() {
        assert_eq!(find_part(PartId::new(101)).unwrap().name, "Clutch Kit Complete");
        assert_eq!(
            find_part(PartId::new(9003)).unwrap().name,
            "LED Headlight Bulbs (Pair)"
        );
        assert!(find_part(PartId::new(9999)).is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let parts = parts_for_vehicle("series-2-2a-3-defender");
        let hits = filter_and_sort(parts, "FILTER", "all", SortOrder::Name);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Air Filter Element");
    }

    #[test]
    fn test_category_filter() {
        let parts = parts_for_vehicle("series-2-2a-3-defender");
        let hits = filter_and_sort(parts, "", "Brakes", SortOrder::Name);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].part_number, "SFP000280");
    }

    #[test]
    fn test_all_category_passes_everything() {
        let parts = parts_for_vehicle("discovery-1");
        let hits = filter_and_sort(parts, "", "all", SortOrder::Name);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_price_sorting() {
        let parts = parts_for_vehicle("land-rover-defender");
        let low = filter_and_sort(parts.clone(), "", "all", SortOrder::PriceLow);
        assert_eq!(low.first().unwrap().name, "LED Light Bar 40\"");
        let high = filter_and_sort(parts, "", "all", SortOrder::PriceHigh);
        assert_eq!(high.first().unwrap().name, "Defender Winch Bumper");
    }

    #[test]
    fn test_rating_sort_puts_best_first() {
        let parts = parts_for_vehicle("land-rover-defender");
        let hits = filter_and_sort(parts, "", "all", SortOrder::Rating);
        assert_eq!(hits.first().unwrap().rating, 4.9);
    }

    #[test]
    fn test_categories_deduplicate_in_order() {
        let parts = parts_for_vehicle("series-2-2a-3-defender");
        let cats = categories(&parts);
        assert_eq!(
            cats,
            vec![
                "Brakes",
                "Engine",
                "Lighting",
                "Body",
                "Transmission",
                "Cooling"
            ]
        );
    }

    #[test]
    fn test_sort_order_parse_round_trip() {
        assert_eq!(SortOrder::parse("price-low"), SortOrder::PriceLow);
        assert_eq!(SortOrder::parse("rating").as_str(), "rating");
        assert_eq!(SortOrder::parse("bogus"), SortOrder::Name);
    }

    #[test]
    fn test_to_cart_line_snapshots_price() {
        let part = find_part(PartId::new(1)).unwrap();
        let line = part.to_cart_line(3);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.price, part.price);
        assert_eq!(line.part_number, "SFP000280");
        assert_eq!(line.total().to_string(), "€137.97");
    }

    #[test]
    fn test_discount_percent() {
        let part = find_part(PartId::new(9001)).unwrap();
        assert_eq!(part.discount_percent(), Some(25));
        let no_offer = find_part(PartId::new(9002)).unwrap();
        assert_eq!(no_offer.discount_percent(), None);
    }
}
