//! Domain models for the admin panel.

pub mod admin_user;
pub mod session;

pub use admin_user::{AdminRole, AdminUser};
