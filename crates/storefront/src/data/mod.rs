//! Demo catalogue data.
//!
//! The storefront runs without a product database: the vehicle list and the
//! per-vehicle parts catalogue live here as static fixtures. Handlers treat
//! this module as the single source of truth for what can be browsed and
//! added to the cart, so a part's price always comes from here and never
//! from the client.

pub mod account;
pub mod parts;
pub mod vehicles;

pub use parts::{
    Part, SortOrder, categories, featured_parts, filter_and_sort, find_part, parts_for_vehicle,
};
pub use vehicles::{Vehicle, vehicle_by_slug, vehicles};
