//! Hosted catalog access.
//!
//! # Architecture
//!
//! - The store's catalog lives on Wix; there is NO local copy, every listing
//!   is a direct API call
//! - Handlers only see the [`CatalogApi`] trait, so tests swap in an
//!   in-memory fake
//! - [`WixCatalogClient`] is the production implementation (`reqwest`)
//!
//! # Example
//!
//! ```rust,ignore
//! use lama_storefront::catalog::{CatalogApi, WixCatalogClient};
//!
//! let client = WixCatalogClient::new(&config.wix);
//!
//! let category = client.resolve_category("all-products").await?;
//! let page = client.query_products(&spec).await?;
//! ```

mod wire;
mod wix;

pub use wix::WixCatalogClient;

use async_trait::async_trait;
use lama_core::{CategoryRef, ListingResult, QuerySpec};
use thiserror::Error;

/// Errors that can occur when talking to the hosted catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by the catalog.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// The query could not be expressed in the catalog's query language.
    #[error("Query encoding error: {0}")]
    Encode(String),
}

/// The two catalog operations the storefront depends on.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Look up a category by its URL slug.
    ///
    /// Returns `Ok(None)` when no category has that slug.
    async fn resolve_category(&self, slug: &str) -> Result<Option<CategoryRef>, CatalogError>;

    /// Run a product query and return one page of results.
    async fn query_products(&self, spec: &QuerySpec) -> Result<ListingResult, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Status {
            status: 503,
            body: "upstream unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog returned HTTP 503: upstream unavailable"
        );
    }

    #[test]
    fn test_rate_limited_error() {
        let err = CatalogError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }
}
