//! Overland Core - Shared domain types.
//!
//! This crate provides common types used across all Overland Parts components:
//! - `storefront` - Public-facing parts shop
//! - `admin` - Internal administration panel
//! - `cli` - Command-line tools for account and catalogue management
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no session plumbing. This keeps it lightweight and allows it to
//! be used anywhere, including unit tests that never touch a server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, statuses,
//!   and session tokens
//! - [`cart`] - The shopping cart container and its line-item arithmetic

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine};
pub use types::*;
