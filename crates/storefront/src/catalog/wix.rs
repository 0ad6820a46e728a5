//! Wix Stores catalog client.
//!
//! Talks to the read-only Stores catalog REST API with `reqwest`. Every call
//! goes straight to the platform; nothing is cached between requests.

use std::sync::Arc;

use async_trait::async_trait;
use lama_core::{CategoryRef, ListingResult, QuerySpec};
use reqwest::{Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::wire::{GetCollectionResponse, QueryProductsRequest, QueryProductsResponse};
use super::{CatalogApi, CatalogError};
use crate::config::WixConfig;

const COLLECTION_BY_SLUG_PATH: &str = "/stores-reader/v1/collections/slug";
const QUERY_PRODUCTS_PATH: &str = "/stores-reader/v1/products/query";

/// Characters of a response body kept in logs and errors.
const BODY_SNIPPET_LEN: usize = 200;

/// Client for the Wix Stores catalog API.
#[derive(Clone)]
pub struct WixCatalogClient {
    inner: Arc<WixCatalogClientInner>,
}

struct WixCatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    site_id: String,
    api_key: String,
}

impl WixCatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &WixConfig) -> Self {
        Self {
            inner: Arc::new(WixCatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base_url.as_str().trim_end_matches('/').to_string(),
                site_id: config.site_id.clone(),
                api_key: config.api_key.expose_secret().to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Authorization", &self.inner.api_key)
            .header("wix-site-id", &self.inner.site_id)
    }

    /// Send an authorized request.
    ///
    /// `429 Too Many Requests` becomes [`CatalogError::RateLimited`]; every
    /// other status is left to the caller.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, CatalogError> {
        let response = self.authorize(request).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        Ok(response)
    }
}

/// Decode a JSON body, treating any non-success status as an error.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let status = response.status();

    // Read the body as text first for better error diagnostics
    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!(
            status = %status,
            body = %snippet(&body),
            "Catalog API returned non-success status"
        );
        return Err(CatalogError::Status {
            status: status.as_u16(),
            body: snippet(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %snippet(&body),
            "Failed to parse catalog API response"
        );
        CatalogError::Parse(e)
    })
}

#[async_trait]
impl CatalogApi for WixCatalogClient {
    #[instrument(skip(self), fields(slug = %slug))]
    async fn resolve_category(&self, slug: &str) -> Result<Option<CategoryRef>, CatalogError> {
        let mut url = url::Url::parse(&self.url(COLLECTION_BY_SLUG_PATH))
            .map_err(|e| CatalogError::Encode(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| CatalogError::Encode("base URL cannot have paths".to_string()))?
            .push(slug);

        let response = self.send(self.inner.client.get(url)).await?;

        // An unknown slug is a 404, not a failure
        if response.status() == StatusCode::NOT_FOUND {
            debug!("Category not found");
            return Ok(None);
        }

        let response: GetCollectionResponse = decode(response).await?;
        let category = response.collection.map(CategoryRef::from);
        debug!(found = category.is_some(), "Resolved category");
        Ok(category)
    }

    #[instrument(skip(self, spec), fields(category_id = %spec.category_id, offset = spec.skip, limit = spec.take))]
    async fn query_products(&self, spec: &QuerySpec) -> Result<ListingResult, CatalogError> {
        let body = QueryProductsRequest::from_spec(spec)?;

        let response = self
            .send(self.inner.client.post(self.url(QUERY_PRODUCTS_PATH)).json(&body))
            .await?;

        // An empty match is a 200 with no products, so a 404 here means a bad route
        let response: QueryProductsResponse = decode(response).await?;
        let result = ListingResult::from(response);
        debug!(
            returned = result.items.len(),
            total = result.total_count,
            "Product query complete"
        );
        Ok(result)
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use lama_core::{ListingParams, ListingRequest};
    use secrecy::SecretString;
    use url::Url;

    use super::*;
    use crate::listing::with_retries;

    /// Serve `status` with `body` for every request, counting hits.
    async fn serve_every_request(status: u16, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let app = axum::Router::new().fallback(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (axum::http::StatusCode::from_u16(status).unwrap(), body)
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        (format!("http://{addr}"), hits)
    }

    fn first_page_spec() -> QuerySpec {
        let request = ListingRequest::from_params(&ListingParams::default(), "C1", 8).unwrap();
        QuerySpec::from(&request)
    }

    fn client(base: &str) -> WixCatalogClient {
        WixCatalogClient::new(&WixConfig {
            api_base_url: Url::parse(base).unwrap(),
            site_id: "site-1".to_string(),
            api_key: SecretString::from("key"),
        })
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = client("https://www.wixapis.com/");
        assert_eq!(
            client.url(QUERY_PRODUCTS_PATH),
            "https://www.wixapis.com/stores-reader/v1/products/query"
        );
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = client("https://proxy.internal/wix");
        assert_eq!(
            client.url(COLLECTION_BY_SLUG_PATH),
            "https://proxy.internal/wix/stores-reader/v1/collections/slug"
        );
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        let body = "é".repeat(500);
        assert_eq!(snippet(&body).chars().count(), BODY_SNIPPET_LEN);
    }

    #[tokio::test]
    async fn test_query_not_found_is_an_error() {
        let (base, _) = serve_every_request(404, "no route!").await;
        let client = client(&base);

        let err = client.query_products(&first_page_spec()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 404, ref body } if body == "no route!"));
    }

    #[tokio::test]
    async fn test_query_not_found_is_retried() {
        let (base, hits) = serve_every_request(404, "no route!").await;
        let client = client(&base);
        let spec = first_page_spec();

        let result = with_retries(3, || client.query_products(&spec)).await;

        assert!(result.is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_query_empty_match() {
        let (base, _) = serve_every_request(200, r#"{"products":[],"totalResults":0}"#).await;
        let client = client(&base);

        let result = client.query_products(&first_page_spec()).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_count, 0);
    }

    #[tokio::test]
    async fn test_unknown_category_is_none() {
        let (base, hits) = serve_every_request(404, "collection not found").await;
        let client = client(&base);

        assert_eq!(client.resolve_category("missing").await.unwrap(), None);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_category_server_error_propagates() {
        let (base, _) = serve_every_request(500, "boom").await;
        let client = client(&base);

        let err = client.resolve_category("shirts").await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let (base, _) = serve_every_request(429, "slow down").await;
        let client = client(&base);

        let err = client.query_products(&first_page_spec()).await.unwrap_err();
        assert!(matches!(err, CatalogError::RateLimited(1)));
    }
}
