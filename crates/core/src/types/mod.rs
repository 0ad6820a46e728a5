//! Core types for the Lama storefront.

pub mod category;
pub mod listing;
pub mod pagination;
pub mod price;
pub mod product;
pub mod query;

pub use category::{CategoryRef, DEFAULT_CATEGORY_SLUG, FALLBACK_CATEGORY_ID};
pub use listing::{
    DEFAULT_MAX_PRICE, DEFAULT_PAGE_SIZE, ListingParamError, ListingParams, ListingRequest,
    ListingResult,
};
pub use pagination::PaginationState;
pub use price::Money;
pub use product::{InfoSection, MediaImage, Product, ProductType, SHORT_DESCRIPTION_TITLE};
pub use query::{QuerySpec, SortDirection, SortDirective};
