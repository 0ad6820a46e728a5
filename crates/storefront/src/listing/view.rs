//! Display data for the listing templates.

use lama_core::{ListingParams, ListingRequest, ListingResult, PaginationState, Product};
use url::form_urlencoded;

use super::sanitize::sanitize_fragment;

/// Path of the listing page; pagination links point back here.
pub const LISTING_PATH: &str = "/shop";

/// Image shown when a product has no main image.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/product.svg";

/// Image display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub href: String,
    pub name: String,
    pub price: String,
    pub image: ImageView,
    /// Alternate image revealed on hover.
    pub hover_image: Option<ImageView>,
    /// Sanitized HTML, safe to render unescaped.
    pub short_description: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let alt = if product.name.is_empty() {
            "Product image".to_string()
        } else {
            product.name.clone()
        };

        Self {
            href: format!("/{}", product.slug),
            name: product.name.clone(),
            price: product.price.display(),
            image: ImageView {
                url: product
                    .main_image
                    .as_ref()
                    .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), |img| img.url.clone()),
                alt: alt.clone(),
            },
            hover_image: product.secondary_image.as_ref().map(|img| ImageView {
                url: img.url.clone(),
                alt,
            }),
            short_description: product
                .short_description()
                .map(sanitize_fragment)
                .filter(|html| !html.is_empty()),
        }
    }
}

/// Previous/next links for a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// One-based page number for display.
    pub page_number: u64,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

/// Everything the listing partial needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub products: Vec<ProductCard>,
    /// Matching products across all pages, as reported by the catalog.
    pub total_count: u64,
    pub state: PaginationState,
    /// Only present for listings filtered by category or name.
    pub pagination: Option<PaginationView>,
}

impl ListingView {
    /// Map a listing result to display data.
    #[must_use]
    pub fn build(params: &ListingParams, request: &ListingRequest, result: &ListingResult) -> Self {
        let state = PaginationState::derive(request.page_index, request.page_size, result.items.len());

        let pagination = params.is_filtered().then(|| PaginationView {
            page_number: u64::from(state.current_page) + 1,
            prev_href: state.prev_page().map(|page| page_href(params, page)),
            next_href: state.next_page().map(|page| page_href(params, page)),
        });

        Self {
            products: result.items.iter().map(ProductCard::from).collect(),
            total_count: result.total_count,
            state,
            pagination,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Result count shown above the grid, e.g. "20 products".
    #[must_use]
    pub fn count_label(&self) -> String {
        match self.total_count {
            1 => "1 product".to_string(),
            n => format!("{n} products"),
        }
    }
}

/// Link to `page`, keeping every other parameter of the current request.
fn page_href(params: &ListingParams, page: u32) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.pairs() {
        if key != "page" {
            query.append_pair(key, value);
        }
    }
    if page > 0 {
        query.append_pair("page", &page.to_string());
    }

    let query = query.finish();
    if query.is_empty() {
        LISTING_PATH.to_string()
    } else {
        format!("{LISTING_PATH}?{query}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use lama_core::{InfoSection, MediaImage, Money};
    use rust_decimal::Decimal;

    use super::*;

    fn product(n: usize) -> Product {
        Product {
            id: format!("p{n}"),
            name: format!("Product {n}"),
            slug: format!("product-{n}"),
            product_type: None,
            price: Money::new(Decimal::new(1000, 2)),
            main_image: None,
            secondary_image: None,
            info_sections: Vec::new(),
        }
    }

    fn result(count: usize, total: u64) -> ListingResult {
        ListingResult {
            items: (0..count).map(product).collect(),
            total_count: total,
        }
    }

    fn build(params: &ListingParams, result: &ListingResult) -> ListingView {
        let request = ListingRequest::from_params(params, "C1", 8).unwrap();
        ListingView::build(params, &request, result)
    }

    #[test]
    fn test_card_defaults() {
        let card = ProductCard::from(&product(1));
        assert_eq!(card.href, "/product-1");
        assert_eq!(card.name, "Product 1");
        assert_eq!(card.price, "$10.00");
        assert_eq!(card.image.url, PLACEHOLDER_IMAGE);
        assert_eq!(card.image.alt, "Product 1");
        assert!(card.hover_image.is_none());
        assert!(card.short_description.is_none());
    }

    #[test]
    fn test_card_images_and_description() {
        let mut p = product(1);
        p.main_image = Some(MediaImage {
            url: "https://static.wixstatic.com/a.jpg".to_string(),
        });
        p.secondary_image = Some(MediaImage {
            url: "https://static.wixstatic.com/b.jpg".to_string(),
        });
        p.info_sections = vec![InfoSection {
            title: "shortDesc".to_string(),
            description: "<p>Nice</p><script>alert(1)</script>".to_string(),
        }];

        let card = ProductCard::from(&p);
        assert_eq!(card.image.url, "https://static.wixstatic.com/a.jpg");
        assert_eq!(
            card.hover_image.unwrap().url,
            "https://static.wixstatic.com/b.jpg"
        );
        assert_eq!(card.short_description.as_deref(), Some("<p>Nice</p>"));
    }

    #[test]
    fn test_unnamed_product_alt_text() {
        let mut p = product(1);
        p.name = String::new();
        assert_eq!(ProductCard::from(&p).image.alt, "Product image");
    }

    #[test]
    fn test_unfiltered_listing_has_no_pagination() {
        let view = build(&ListingParams::default(), &result(8, 20));
        assert_eq!(view.products.len(), 8);
        assert!(view.state.has_next);
        assert!(view.pagination.is_none());
    }

    #[test]
    fn test_filtered_first_page() {
        let params = ListingParams {
            cat: Some("shirts".to_string()),
            sort: Some("asc price".to_string()),
            ..ListingParams::default()
        };
        let view = build(&params, &result(8, 20));
        let pagination = view.pagination.unwrap();

        assert_eq!(pagination.page_number, 1);
        assert_eq!(pagination.prev_href, None);
        assert_eq!(
            pagination.next_href.as_deref(),
            Some("/shop?cat=shirts&sort=asc+price&page=1")
        );
    }

    #[test]
    fn test_filtered_last_page() {
        let params = ListingParams {
            name: Some("lin".to_string()),
            page: Some("1".to_string()),
            ..ListingParams::default()
        };
        let view = build(&params, &result(3, 11));
        let pagination = view.pagination.unwrap();

        assert_eq!(pagination.page_number, 2);
        assert_eq!(pagination.prev_href.as_deref(), Some("/shop?name=lin"));
        assert_eq!(pagination.next_href, None);
    }

    #[test]
    fn test_page_href_encodes_values() {
        let params = ListingParams {
            name: Some("T&C <b>".to_string()),
            ..ListingParams::default()
        };
        assert_eq!(page_href(&params, 2), "/shop?name=T%26C+%3Cb%3E&page=2");
    }

    // Known imprecision: total_count says everything is on this page, but a
    // full page still links to a next page that will come back empty.
    #[test]
    fn test_exact_multiple_still_links_next() {
        let params = ListingParams {
            cat: Some("shirts".to_string()),
            ..ListingParams::default()
        };
        let view = build(&params, &result(8, 8));

        assert_eq!(view.total_count, 8);
        assert!(view.state.has_next);
        assert_eq!(
            view.pagination.unwrap().next_href.as_deref(),
            Some("/shop?cat=shirts&page=1")
        );
    }

    #[test]
    fn test_count_label() {
        let params = ListingParams::default();
        assert_eq!(build(&params, &result(1, 1)).count_label(), "1 product");
        assert_eq!(build(&params, &result(8, 20)).count_label(), "20 products");
    }

    #[test]
    fn test_empty_result() {
        let view = build(&ListingParams::default(), &ListingResult::empty());
        assert!(view.is_empty());
        assert!(!view.state.has_next);
        assert!(!view.state.has_prev);
    }
}
