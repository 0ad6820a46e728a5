//! Catalog product query built from a listing request.
//!
//! A [`QuerySpec`] is what the storefront asks the hosted catalog for: every
//! filter is combined with logical AND, followed by a result window and an
//! optional ordering. Building one is a pure mapping from a
//! [`ListingRequest`] and never touches the network.
//!
//! Price bounds are exclusive on both ends: a product priced exactly at
//! `price_above` or `price_below` is not returned.

use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::listing::ListingRequest;
use super::product::ProductType;

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Ordering on a single catalog field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective {
    pub direction: SortDirection,
    pub field: String,
}

impl SortDirective {
    /// Parse a `"<direction> <field>"` directive such as `"desc price"`.
    ///
    /// Returns `None` for an unrecognised direction token or a missing
    /// field; callers apply no ordering in that case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let direction = match tokens.next()? {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        let field = tokens.next()?;

        Some(Self {
            direction,
            field: field.to_string(),
        })
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction.as_str(), self.field)
    }
}

/// Catalog query built from a listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Product name must start with this (empty matches everything).
    pub name_prefix: String,
    /// Product must belong to this category.
    pub category_id: String,
    /// Product type must be one of these.
    pub product_types: BTreeSet<ProductType>,
    /// Price must be strictly greater than this.
    pub price_above: Decimal,
    /// Price must be strictly less than this.
    pub price_below: Decimal,
    /// Number of matching products to skip.
    pub skip: u64,
    /// Maximum number of products to return.
    pub take: u32,
    /// Optional ordering.
    pub sort: Option<SortDirective>,
}

impl From<&ListingRequest> for QuerySpec {
    fn from(request: &ListingRequest) -> Self {
        Self {
            name_prefix: request.name_filter.clone(),
            category_id: request.category_id.clone(),
            product_types: request.type_filter.clone(),
            price_above: request.min_price,
            price_below: request.max_price,
            skip: u64::from(request.page_index) * u64::from(request.page_size),
            take: request.page_size,
            sort: request.sort.clone(),
        }
    }
}
