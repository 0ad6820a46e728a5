//! Product listing: category resolution, querying and presentation.
//!
//! A listing page is rendered in two sequential catalog calls:
//!
//! 1. [`resolve_category`] turns the `cat` slug into a category id. Failures
//!    here propagate and the page errors out.
//! 2. [`load_listing`] runs the product query through [`with_retries`].
//!    When the retry budget is exhausted the failure is logged and an empty
//!    listing is shown instead.
//!
//! [`ListingView`] then maps the result to product cards and pagination links.

mod resolver;
mod retry;
mod sanitize;
mod service;
mod view;

pub use resolver::{ResolvedCategory, resolve_category};
pub use retry::with_retries;
pub use sanitize::sanitize_fragment;
pub use service::load_listing;
pub use view::{ImageView, LISTING_PATH, ListingView, PLACEHOLDER_IMAGE, PaginationView, ProductCard};
