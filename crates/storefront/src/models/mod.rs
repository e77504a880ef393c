//! Domain models for storefront.

pub mod customer;
pub mod session;

pub use customer::{Customer, ProfileUpdate};
