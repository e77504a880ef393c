//! Business logic services for storefront.
//!
//! # Services
//!
//! - `accounts` - Customer registry: registration, login, profile updates

pub mod accounts;
