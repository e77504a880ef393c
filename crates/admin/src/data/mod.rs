//! Demo back-office data.
//!
//! The admin panel runs without a database: stock levels, customer records,
//! order history, analytics series, and the content-page inventory live here
//! as static fixtures. Only the admin directory and the store settings are
//! live state; everything in this module just fills out the tables.

pub mod analytics;
pub mod catalogue;
pub mod content;
pub mod customers;
pub mod orders;
