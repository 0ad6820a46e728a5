//! Category slug resolution.

use lama_core::{CategoryRef, FALLBACK_CATEGORY_ID};
use tracing::{debug, instrument};

use crate::catalog::{CatalogApi, CatalogError};

/// A category slug resolved to the id used in product queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    /// Category id, or [`FALLBACK_CATEGORY_ID`] when the slug matched nothing.
    pub id: String,
    /// Display name, if the catalog returned one.
    pub name: Option<String>,
}

impl ResolvedCategory {
    fn from_lookup(category: Option<CategoryRef>) -> Self {
        let (id, name) = category.map_or((None, None), |c| (c.id, c.name));

        Self {
            id: id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| FALLBACK_CATEGORY_ID.to_string()),
            name,
        }
    }
}

/// Resolve a category slug with one catalog lookup.
///
/// A missing category, or one without an id, resolves to the fallback id.
///
/// # Errors
///
/// Returns the catalog error unchanged; there is no retry on this path.
#[instrument(skip(catalog))]
pub async fn resolve_category(
    catalog: &dyn CatalogApi,
    slug: &str,
) -> Result<ResolvedCategory, CatalogError> {
    let category = catalog.resolve_category(slug).await?;
    let resolved = ResolvedCategory::from_lookup(category);
    debug!(category_id = %resolved.id, "Category resolved");
    Ok(resolved)
}
