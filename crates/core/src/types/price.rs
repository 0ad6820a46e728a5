//! Monetary amounts as reported by the hosted catalog.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price.
///
/// The catalog sends both the raw amount and a string already formatted for
/// the store's locale. The formatted string wins when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code, if the catalog reported one.
    pub currency_code: Option<String>,
    /// Preformatted price (e.g., "$25.00").
    pub formatted: Option<String>,
}

impl Money {
    /// Create a price with no currency or formatting information.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency_code: None,
            formatted: None,
        }
    }

    /// Text shown on a product card.
    #[must_use]
    pub fn display(&self) -> String {
        match self.formatted.as_deref() {
            Some(formatted) if !formatted.is_empty() => formatted.to_string(),
            _ => format!("${:.2}", self.amount),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
