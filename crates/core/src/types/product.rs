//! Products as read from the hosted catalog.
//!
//! The catalog owns every product; the storefront only reads the handful of
//! fields it needs to draw a product card.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::price::Money;

/// Title of the info section holding the product's short description.
pub const SHORT_DESCRIPTION_TITLE: &str = "shortDesc";

/// Kind of product sold by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Physical,
    Digital,
}

impl ProductType {
    /// Every product type, in the order the catalog lists them.
    pub const ALL: [Self; 2] = [Self::Physical, Self::Digital];

    /// Wire name of the product type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Digital => "digital",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physical" => Ok(Self::Physical),
            "digital" => Ok(Self::Digital),
            other => Err(format!("unknown product type '{other}'")),
        }
    }
}

/// An image hosted on the catalog's media CDN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaImage {
    /// Absolute image URL.
    pub url: String,
}

/// A titled block of free-form product copy (may contain markup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoSection {
    pub title: String,
    pub description: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug of the product page.
    pub slug: String,
    /// Physical or digital, when the catalog reports it.
    pub product_type: Option<ProductType>,
    /// Current price.
    pub price: Money,
    /// Main product image.
    pub main_image: Option<MediaImage>,
    /// Alternate image shown on hover.
    pub secondary_image: Option<MediaImage>,
    /// Additional info sections, in catalog order.
    pub info_sections: Vec<InfoSection>,
}

impl Product {
    /// Raw (unsanitized) short description markup.
    ///
    /// Looks for the first info section titled exactly `shortDesc`.
    #[must_use]
    pub fn short_description(&self) -> Option<&str> {
        self.info_sections
            .iter()
            .find(|section| section.title == SHORT_DESCRIPTION_TITLE)
            .map(|section| section.description.as_str())
    }
}
