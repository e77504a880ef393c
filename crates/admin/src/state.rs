//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::services::directory::{AdminDirectory, DirectoryError};
use crate::services::settings::StoreSettings;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources: configuration, the admin directory, and the store settings.
/// Both stores are injected rather than constructed here so tests can seed
/// their own users and settings.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    directory: Arc<AdminDirectory>,
    settings: Arc<StoreSettings>,
}

impl AppState {
    /// Create the production state: demo admin enrolled, default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the demo admin cannot be enrolled.
    pub fn new(config: AdminConfig) -> Result<Self, DirectoryError> {
        let directory = Arc::new(AdminDirectory::seeded()?);
        let settings = Arc::new(StoreSettings::with_defaults());
        Ok(Self::with_stores(config, directory, settings))
    }

    /// Create state around an existing directory and settings store.
    #[must_use]
    pub fn with_stores(
        config: AdminConfig,
        directory: Arc<AdminDirectory>,
        settings: Arc<StoreSettings>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                directory,
                settings,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the admin directory.
    #[must_use]
    pub fn directory(&self) -> &AdminDirectory {
        &self.inner.directory
    }

    /// Get a reference to the store settings.
    #[must_use]
    pub fn settings(&self) -> &StoreSettings {
        &self.inner.settings
    }
}
