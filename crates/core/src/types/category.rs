//! Catalog categories (collections on the hosted platform).

use serde::{Deserialize, Serialize};

/// Slug used when the request names no category.
pub const DEFAULT_CATEGORY_SLUG: &str = "all-products";

/// Category id used when a slug resolves to nothing.
pub const FALLBACK_CATEGORY_ID: &str = "00000000-000000-000000-000000000001";

/// A category as returned by a slug lookup.
///
/// Both fields are optional on the platform side; a category without an id
/// is treated like a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: Option<String>,
    pub name: Option<String>,
}
