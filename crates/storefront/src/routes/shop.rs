//! Shop listing route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::Redirect,
};
use lama_core::{ListingParams, ListingRequest};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::listing::{LISTING_PATH, ListingView, load_listing, resolve_category};
use crate::state::AppState;

/// Shop listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopTemplate {
    pub heading: String,
    pub listing: ListingView,
}

/// Redirect the site root to the shop.
pub async fn home() -> Redirect {
    Redirect::to(LISTING_PATH)
}

/// Display the product listing.
///
/// The category lookup is not retried and its failure becomes an error
/// page. Product query failures are absorbed by [`load_listing`].
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<ShopTemplate> {
    let settings = state.listing();
    let category = resolve_category(state.catalog(), params.category_slug()).await?;
    let request = ListingRequest::from_params(&params, category.id, settings.page_size)?;

    let result = load_listing(state.catalog(), &request, settings.query_retries).await;

    Ok(ShopTemplate {
        heading: heading(category.name.as_deref()),
        listing: ListingView::build(&params, &request, &result),
    })
}

fn heading(category_name: Option<&str>) -> String {
    let name = category_name.filter(|n| !n.is_empty()).unwrap_or("Products");
    format!("{name} For You!")
}
