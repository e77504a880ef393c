//! Application state shared across handlers.

use std::path::Path;
use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::content::{ContentError, ContentStore};
use crate::services::accounts::{AccountError, AccountRegistry};

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to load content: {0}")]
    Content(#[from] ContentError),
    #[error("failed to seed accounts: {0}")]
    Accounts(#[from] AccountError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources: configuration, the account registry, and the content store.
/// The registry is injected rather than constructed here so tests can seed
/// their own accounts.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    accounts: Arc<AccountRegistry>,
    content: ContentStore,
}

impl AppState {
    /// Create the production state: demo account seeded, content loaded
    /// from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory cannot be read or the demo
    /// account cannot be seeded.
    pub fn new(config: StorefrontConfig, content_dir: &Path) -> Result<Self, StateError> {
        let content = ContentStore::load(content_dir)?;
        let accounts = Arc::new(AccountRegistry::with_demo_account()?);

        Ok(Self::with_registry(config, accounts, content))
    }

    /// Create state around an existing account registry and content store.
    #[must_use]
    pub fn with_registry(
        config: StorefrontConfig,
        accounts: Arc<AccountRegistry>,
        content: ContentStore,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                accounts,
                content,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the account registry.
    #[must_use]
    pub fn accounts(&self) -> &AccountRegistry {
        &self.inner.accounts
    }

    /// Get a reference to the page content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }
}
