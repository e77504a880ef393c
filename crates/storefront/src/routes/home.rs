//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::data::{self, Part, Vehicle};
use crate::filters;
use crate::middleware::{CspNonce, OptionalCustomer};
use crate::models::customer::Customer;

// =============================================================================
// Hero Configuration (Static content for carousel)
// =============================================================================

/// A single slide in the hero carousel.
#[derive(Clone)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
    pub image_path: &'static str,
}

/// Hero carousel configuration.
#[derive(Clone)]
pub struct HeroConfig {
    pub slides: Vec<HeroSlide>,
    pub autoplay_ms: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            slides: vec![
                HeroSlide {
                    title: "Premium Engine Parts",
                    subtitle: "High-performance components for your vehicle",
                    button_text: "Shop Engine Parts",
                    button_url: "/shop/land-rover-defender?category=Engine",
                    image_path: "/static/images/hero/engine-parts.jpg",
                },
                HeroSlide {
                    title: "Brake & Suspension Systems",
                    subtitle: "Safety and performance you can trust",
                    button_text: "Shop Brakes",
                    button_url: "/shop/discovery-4?category=Brakes",
                    image_path: "/static/images/hero/brake-systems.jpg",
                },
                HeroSlide {
                    title: "Defender Heritage Range",
                    subtitle: "Keeping the classics on the road since 1985",
                    button_text: "Shop Defender",
                    button_url: "/shop/series-2-2a-3-defender",
                    image_path: "/static/images/hero/defender-heritage.jpg",
                },
            ],
            autoplay_ms: 5000,
        }
    }
}

// =============================================================================
// Category Grid
// =============================================================================

/// A tile in the "browse by category" grid.
#[derive(Clone)]
pub struct CategoryTile {
    pub name: &'static str,
    pub count_label: &'static str,
    pub image: &'static str,
    pub shop_url: &'static str,
}

/// The six category tiles under the hero.
fn category_tiles() -> Vec<CategoryTile> {
    vec![
        CategoryTile {
            name: "Engine Parts",
            count_label: "2500+ parts",
            image: "/static/images/categories/engine.jpg",
            shop_url: "/shop/land-rover-defender?category=Engine",
        },
        CategoryTile {
            name: "Brakes & Suspension",
            count_label: "1800+ parts",
            image: "/static/images/categories/brakes.jpg",
            shop_url: "/shop/discovery-4?category=Brakes",
        },
        CategoryTile {
            name: "Electrical & Lighting",
            count_label: "1200+ parts",
            image: "/static/images/categories/electrical.jpg",
            shop_url: "/shop/discovery-5?category=Lighting",
        },
        CategoryTile {
            name: "Body & Exterior",
            count_label: "900+ parts",
            image: "/static/images/categories/body.jpg",
            shop_url: "/shop/new-defender-2020?category=Exterior",
        },
        CategoryTile {
            name: "Transmission & Cooling",
            count_label: "1500+ parts",
            image: "/static/images/categories/transmission.jpg",
            shop_url: "/shop/series-2-2a-3-defender?category=Transmission",
        },
        CategoryTile {
            name: "Interior & Trim",
            count_label: "800+ parts",
            image: "/static/images/categories/interior.jpg",
            shop_url: "/shop/discovery-2?category=Interior",
        },
    ]
}

// =============================================================================
// Trust Indicators
// =============================================================================

/// A reason-to-buy block in the strip above the footer.
#[derive(Clone)]
pub struct TrustIndicator {
    pub title: &'static str,
    pub detail: &'static str,
}

/// The "Why Choose Overland Parts?" strip.
fn trust_indicators() -> Vec<TrustIndicator> {
    vec![
        TrustIndicator {
            title: "40 Years Experience",
            detail: "Supplying Land Rover owners since 1985",
        },
        TrustIndicator {
            title: "Extensive Catalogue",
            detail: "Over 200,000 parts for every model",
        },
        TrustIndicator {
            title: "Reliable Delivery",
            detail: "Tracked shipping across Ireland and the UK",
        },
        TrustIndicator {
            title: "Top Rated",
            detail: "33,000+ five-star Trustpilot reviews",
        },
    ]
}

// =============================================================================
// Template and Handler
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub customer: Option<Customer>,
    /// Per-request CSP nonce for the carousel's inline script.
    pub nonce: String,
    /// Hero carousel configuration.
    pub hero: HeroConfig,
    /// All vehicle models for the selector.
    pub vehicles: &'static [Vehicle],
    /// Category tiles under the hero.
    pub categories: Vec<CategoryTile>,
    /// Featured parts grid.
    pub featured: Vec<&'static Part>,
    /// Reasons-to-buy strip.
    pub trust: Vec<TrustIndicator>,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(
    OptionalCustomer(customer): OptionalCustomer,
    CspNonce(nonce): CspNonce,
) -> impl IntoResponse {
    HomeTemplate {
        customer,
        nonce,
        hero: HeroConfig::default(),
        vehicles: data::vehicles(),
        categories: category_tiles(),
        featured: data::featured_parts(),
        trust: trust_indicators(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::data::{self, SortOrder};

    use super::*;

    /// Resolve a `/shop/{slug}?category=X` marketing URL against the
    /// catalogue, returning how many parts the landing page would show.
    fn landing_page_results(url: &str) -> usize {
        let rest = url.strip_prefix("/shop/").unwrap();
        let (slug, query) = rest.split_once('?').unwrap_or((rest, ""));
        let vehicle = data::vehicle_by_slug(slug).unwrap();
        let category = query.strip_prefix("category=").unwrap_or("");
        let parts = data::parts_for_vehicle(vehicle.slug);
        data::filter_and_sort(parts, "", category, SortOrder::Name).len()
    }

    #[test]
    fn test_hero_buttons_land_on_stocked_pages() {
        for slide in HeroConfig::default().slides {
            assert!(
                landing_page_results(slide.button_url) > 0,
                "hero slide {:?} links to an empty shop page",
                slide.title
            );
        }
    }

    #[test]
    fn test_category_tiles_land_on_stocked_pages() {
        let tiles = category_tiles();
        assert_eq!(tiles.len(), 6);
        for tile in tiles {
            assert!(
                landing_page_results(tile.shop_url) > 0,
                "category tile {:?} links to an empty shop page",
                tile.name
            );
        }
    }
}
