//! Fail-soft product listing.

use lama_core::{ListingRequest, ListingResult, QuerySpec};
use tracing::instrument;

use super::retry::with_retries;
use crate::catalog::CatalogApi;

/// Query one page of products for a listing request.
///
/// The query is retried `retries` times after the first failure. If every
/// attempt fails the error is logged (and reported to Sentry through the
/// tracing layer) and an empty result is returned, so the page renders
/// "No products found." rather than an error.
#[instrument(skip(catalog, request), fields(category_id = %request.category_id, page = request.page_index))]
pub async fn load_listing(
    catalog: &dyn CatalogApi,
    request: &ListingRequest,
    retries: u32,
) -> ListingResult {
    let spec = QuerySpec::from(request);

    match with_retries(retries, || catalog.query_products(&spec)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch products from catalog");
            ListingResult::empty()
        }
    }
}
