//! The Land Rover models the shop stocks parts for.

/// Slug constants shared between the vehicle list and the parts catalogue,
/// so a typo in either is a compile error.
pub mod slugs {
    pub const SERIES_DEFENDER: &str = "series-2-2a-3-defender";
    pub const DEFENDER: &str = "land-rover-defender";
    pub const NEW_DEFENDER: &str = "new-defender-2020";
    pub const DISCOVERY_1: &str = "discovery-1";
    pub const DISCOVERY_2: &str = "discovery-2";
    pub const DISCOVERY_3: &str = "discovery-3";
    pub const DISCOVERY_4: &str = "discovery-4";
    pub const DISCOVERY_5: &str = "discovery-5";
    pub const DISCOVERY_SPORT: &str = "discovery-sport";
    pub const RR_SPORT_06_09: &str = "range-rover-sport-06-09";
    pub const RR_SPORT_09_13: &str = "range-rover-sport-09-13";
    pub const RR_SPORT_L494: &str = "range-rover-sport-l494";
}

/// A vehicle model with its URL slug and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub slug: &'static str,
    pub name: &'static str,
}

/// All vehicle models, in the order the home page lists them.
const VEHICLES: [Vehicle; 12] = [
    Vehicle {
        slug: slugs::SERIES_DEFENDER,
        name: "Series 2 2A & 3 Defender",
    },
    Vehicle {
        slug: slugs::DEFENDER,
        name: "Land Rover Defender",
    },
    Vehicle {
        slug: slugs::NEW_DEFENDER,
        name: "New Defender from 2020",
    },
    Vehicle {
        slug: slugs::DISCOVERY_1,
        name: "Discovery 1",
    },
    Vehicle {
        slug: slugs::DISCOVERY_2,
        name: "Discovery 2",
    },
    Vehicle {
        slug: slugs::DISCOVERY_3,
        name: "Discovery 3",
    },
    Vehicle {
        slug: slugs::DISCOVERY_4,
        name: "Discovery 4",
    },
    Vehicle {
        slug: slugs::DISCOVERY_5,
        name: "Discovery 5",
    },
    Vehicle {
        slug: slugs::DISCOVERY_SPORT,
        name: "Discovery Sport",
    },
    Vehicle {
        slug: slugs::RR_SPORT_06_09,
        name: "Range Rover Sport 06-09",
    },
    Vehicle {
        slug: slugs::RR_SPORT_09_13,
        name: "Range Rover Sport 09-13",
    },
    Vehicle {
        slug: slugs::RR_SPORT_L494,
        name: "Range Rover Sport L494 2013-2022",
    },
];

/// All vehicle models.
#[must_use]
pub const fn vehicles() -> &'static [Vehicle] {
    &VEHICLES
}

/// Look up a vehicle by its URL slug.
#[must_use]
pub fn vehicle_by_slug(slug: &str) -> Option<&'static Vehicle> {
    VEHICLES.iter().find(|v| v.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_models() {
        assert_eq!(vehicles().len(), 12);
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in VEHICLES.iter().enumerate() {
            for b in &VEHICLES[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn test_lookup_by_slug() {
        let vehicle = vehicle_by_slug("discovery-3").unwrap();
        assert_eq!(vehicle.name, "Discovery 3");
        assert!(vehicle_by_slug("series-1").is_none());
    }
}
