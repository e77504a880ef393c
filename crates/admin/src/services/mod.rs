//! Business logic services for the admin panel.
//!
//! # Services
//!
//! - `directory` - Argon2-backed admin user directory
//! - `settings` - In-memory store settings edited by the settings page

pub mod directory;
pub mod settings;

pub use directory::{AdminDirectory, DirectoryError};
pub use settings::{SettingsSnapshot, StoreSettings};
