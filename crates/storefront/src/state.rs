//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{CatalogApi, WixCatalogClient};
use crate::config::{ListingSettings, StorefrontConfig};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The catalog is held behind the
/// [`CatalogApi`] trait so tests can inject a fake.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Arc<dyn CatalogApi>,
    listing: ListingSettings,
}

impl AppState {
    /// Create application state backed by the Wix catalog.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self::with_catalog(Arc::new(WixCatalogClient::new(&config.wix)), config.listing)
    }

    /// Create application state around any catalog implementation.
    #[must_use]
    pub fn with_catalog(catalog: Arc<dyn CatalogApi>, listing: ListingSettings) -> Self {
        Self {
            inner: Arc::new(AppStateInner { catalog, listing }),
        }
    }

    /// Get the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogApi {
        self.inner.catalog.as_ref()
    }

    /// Get the listing settings.
    #[must_use]
    pub fn listing(&self) -> ListingSettings {
        self.inner.listing
    }
}
