//! Wire types for the Wix Stores catalog REST API.
//!
//! Requests are built from a [`QuerySpec`]; responses are converted into
//! `lama_core` types right away so nothing outside this module sees the
//! platform's JSON shapes.

use std::str::FromStr;

use lama_core::{
    CategoryRef, InfoSection, ListingResult, MediaImage, Money, Product, ProductType, QuerySpec,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value, json};

use super::CatalogError;

// =============================================================================
// Product query request
// =============================================================================

/// Body of `POST /stores-reader/v1/products/query`.
#[derive(Debug, Serialize)]
pub struct QueryProductsRequest {
    pub query: ProductQuery,
}

/// The platform takes filter and sort as JSON documents encoded in strings.
#[derive(Debug, Serialize)]
pub struct ProductQuery {
    pub filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub paging: Paging,
}

#[derive(Debug, Serialize)]
pub struct Paging {
    pub limit: u32,
    pub offset: u64,
}

impl QueryProductsRequest {
    /// Encode a query spec.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Encode` if a price bound has no JSON number
    /// representation.
    pub fn from_spec(spec: &QuerySpec) -> Result<Self, CatalogError> {
        Ok(Self {
            query: ProductQuery {
                filter: encode_filter(spec)?.to_string(),
                sort: encode_sort(spec).map(|sort| sort.to_string()),
                paging: Paging {
                    limit: spec.take,
                    offset: spec.skip,
                },
            },
        })
    }
}

/// Build the AND-combined filter document.
fn encode_filter(spec: &QuerySpec) -> Result<Value, CatalogError> {
    let product_types: Vec<&str> = spec.product_types.iter().map(|t| t.as_str()).collect();
    let price_above = decimal_number(spec.price_above)?;
    let price_below = decimal_number(spec.price_below)?;

    Ok(json!({
        "name": { "$startsWith": spec.name_prefix },
        "collectionIds": { "$eq": spec.category_id },
        "productType": { "$hasSome": product_types },
        "priceData.price": { "$gt": price_above, "$lt": price_below },
    }))
}

fn encode_sort(spec: &QuerySpec) -> Option<Value> {
    let sort = spec.sort.as_ref()?;
    let mut order = Map::new();
    order.insert(
        sort.field.clone(),
        Value::String(sort.direction.as_str().to_string()),
    );
    Some(Value::Array(vec![Value::Object(order)]))
}

fn decimal_number(value: Decimal) -> Result<Value, CatalogError> {
    Number::from_str(&value.normalize().to_string())
        .map(Value::Number)
        .map_err(|e| CatalogError::Encode(format!("price {value}: {e}")))
}

// =============================================================================
// Product query response
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryProductsResponse {
    #[serde(default)]
    pub products: Vec<WixProduct>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WixProduct {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    product_type: Option<String>,
    #[serde(default)]
    price: Option<WixPrice>,
    #[serde(default)]
    price_data: Option<WixPrice>,
    #[serde(default)]
    media: Option<WixMedia>,
    #[serde(default)]
    additional_info_sections: Vec<WixInfoSection>,
}

#[derive(Debug, Deserialize)]
struct WixPrice {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    price: Option<Number>,
    #[serde(default)]
    formatted: Option<WixFormattedPrice>,
}

#[derive(Debug, Deserialize)]
struct WixFormattedPrice {
    #[serde(default)]
    price: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WixMedia {
    #[serde(default)]
    main_media: Option<WixMediaItem>,
    #[serde(default)]
    items: Vec<WixMediaItem>,
}

#[derive(Debug, Deserialize)]
struct WixMediaItem {
    #[serde(default)]
    image: Option<WixImage>,
}

#[derive(Debug, Deserialize)]
struct WixImage {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WixInfoSection {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl WixMediaItem {
    fn into_image(self) -> Option<MediaImage> {
        self.image
            .and_then(|image| image.url)
            .filter(|url| !url.is_empty())
            .map(|url| MediaImage { url })
    }
}

impl From<WixPrice> for Money {
    fn from(price: WixPrice) -> Self {
        let amount = price
            .price
            .and_then(|n| Decimal::from_str(&n.to_string()).ok())
            .unwrap_or_default();

        Self {
            amount,
            currency_code: price.currency,
            formatted: price.formatted.and_then(|f| f.price),
        }
    }
}

impl From<WixProduct> for Product {
    fn from(product: WixProduct) -> Self {
        let (main_image, secondary_image) = product.media.map_or((None, None), |media| {
            // The hover image is the second entry of the media gallery
            let secondary = media
                .items
                .into_iter()
                .nth(1)
                .and_then(WixMediaItem::into_image);
            (media.main_media.and_then(WixMediaItem::into_image), secondary)
        });

        Self {
            id: product.id.unwrap_or_default(),
            name: product.name.unwrap_or_default(),
            slug: product.slug.unwrap_or_default(),
            product_type: product
                .product_type
                .and_then(|t| ProductType::from_str(&t).ok()),
            price: product
                .price
                .or(product.price_data)
                .map_or_else(|| Money::new(Decimal::ZERO), Money::from),
            main_image,
            secondary_image,
            info_sections: product
                .additional_info_sections
                .into_iter()
                .map(|section| InfoSection {
                    title: section.title.unwrap_or_default(),
                    description: section.description.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl From<QueryProductsResponse> for ListingResult {
    fn from(response: QueryProductsResponse) -> Self {
        let items: Vec<Product> = response.products.into_iter().map(Product::from).collect();
        let total_count = response
            .total_results
            .unwrap_or_else(|| items.len() as u64);

        Self { items, total_count }
    }
}

// =============================================================================
// Collection lookup response
// =============================================================================

/// Body of `GET /stores-reader/v1/collections/slug/{slug}`.
#[derive(Debug, Deserialize)]
pub struct GetCollectionResponse {
    #[serde(default)]
    pub collection: Option<WixCollection>,
}

#[derive(Debug, Deserialize)]
pub struct WixCollection {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl From<WixCollection> for CategoryRef {
    fn from(collection: WixCollection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
        }
    }
}
