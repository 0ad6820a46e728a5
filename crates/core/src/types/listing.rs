//! Listing requests and results.
//!
//! URL query parameters arrive as [`ListingParams`], a bag of optional
//! strings. [`ListingRequest::from_params`] validates them at the boundary
//! and fills in defaults, so everything past that point works with typed
//! values.

use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::DEFAULT_CATEGORY_SLUG;
use super::product::{Product, ProductType};
use super::query::SortDirective;

/// Products per page when not configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// Upper price bound used when the request sets none.
pub const DEFAULT_MAX_PRICE: Decimal = Decimal::from_parts(999_999, 0, 0, false, 0);

/// A rejected listing parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingParamError {
    #[error("invalid page '{0}': expected a non-negative integer")]
    InvalidPage(String),
    #[error("invalid {field} price '{value}': expected a non-negative number")]
    InvalidPrice { field: &'static str, value: String },
    #[error("invalid product type: {0}")]
    InvalidType(String),
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Raw listing parameters from the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingParams {
    /// Category slug.
    pub cat: Option<String>,
    /// Product name prefix.
    pub name: Option<String>,
    /// Comma-separated product types.
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    /// Exclusive lower price bound.
    pub min: Option<String>,
    /// Exclusive upper price bound.
    pub max: Option<String>,
    /// Sort directive, `"<asc|desc> <field>"`.
    pub sort: Option<String>,
    /// Zero-based page index.
    pub page: Option<String>,
}

impl ListingParams {
    /// Category slug to resolve, falling back to the "all products" category.
    #[must_use]
    pub fn category_slug(&self) -> &str {
        non_empty(self.cat.as_deref()).unwrap_or(DEFAULT_CATEGORY_SLUG)
    }

    /// Whether the request narrows the listing by category or by name.
    ///
    /// Pagination controls are only offered for filtered listings.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        non_empty(self.cat.as_deref()).is_some() || non_empty(self.name.as_deref()).is_some()
    }

    /// Query-string pairs for every parameter that is set, in a stable order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("cat", &self.cat),
            ("name", &self.name),
            ("type", &self.product_type),
            ("min", &self.min),
            ("max", &self.max),
            ("sort", &self.sort),
            ("page", &self.page),
        ]
        .into_iter()
        .filter_map(|(key, value)| non_empty(value.as_deref()).map(|v| (key, v)))
        .collect()
    }
}

/// A validated listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub category_id: String,
    pub name_filter: String,
    pub type_filter: BTreeSet<ProductType>,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub sort: Option<SortDirective>,
    pub page_index: u32,
    pub page_size: u32,
}

impl ListingRequest {
    /// Validate raw URL parameters into a listing request.
    ///
    /// Missing or empty parameters take their defaults. `min <= max` is not
    /// checked; the catalog simply returns nothing for an inverted range.
    ///
    /// # Errors
    ///
    /// Returns `ListingParamError` for a non-numeric or negative page or
    /// price, an unknown product type, or a zero page size.
    pub fn from_params(
        params: &ListingParams,
        category_id: impl Into<String>,
        page_size: u32,
    ) -> Result<Self, ListingParamError> {
        if page_size == 0 {
            return Err(ListingParamError::ZeroPageSize);
        }

        let page_index = match non_empty(params.page.as_deref()) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ListingParamError::InvalidPage(raw.to_string()))?,
            None => 0,
        };

        Ok(Self {
            category_id: category_id.into(),
            name_filter: params.name.clone().unwrap_or_default(),
            type_filter: parse_types(params.product_type.as_deref())?,
            min_price: parse_price("min", params.min.as_deref())?.unwrap_or(Decimal::ZERO),
            max_price: parse_price("max", params.max.as_deref())?.unwrap_or(DEFAULT_MAX_PRICE),
            sort: params.sort.as_deref().and_then(SortDirective::parse),
            page_index,
            page_size,
        })
    }
}

/// One page of products returned by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingResult {
    /// Products on this page, at most `page_size` of them.
    pub items: Vec<Product>,
    /// Total matches across all pages, as reported by the catalog.
    pub total_count: u64,
}

impl ListingResult {
    /// The result shown when the catalog could not be queried.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_types(raw: Option<&str>) -> Result<BTreeSet<ProductType>, ListingParamError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(ProductType::ALL.into_iter().collect());
    };

    let types = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ProductType::from_str)
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(ListingParamError::InvalidType)?;

    if types.is_empty() {
        Ok(ProductType::ALL.into_iter().collect())
    } else {
        Ok(types)
    }
}

fn parse_price(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<Decimal>, ListingParamError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };

    let invalid = || ListingParamError::InvalidPrice {
        field,
        value: raw.to_string(),
    };

    let price = Decimal::from_str(raw.trim()).map_err(|_| invalid())?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(invalid());
    }
    Ok(Some(price))
}
