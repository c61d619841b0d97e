//! The page-side product catalog.
//!
//! Purchasable items are rendered by the surrounding page, not by the
//! widget; each product card exposes `data-id`, `data-name`, and
//! `data-price` attributes on its container. [`ProductCard`] is the parsed
//! form of those attributes and is all the widget ever learns about a
//! product - prices are trusted verbatim at add time.

use thiserror::Error;

use velomir_core::{Money, ProductId};

/// Errors parsing a product card's data attributes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("missing data attribute: {0}")]
    MissingAttr(&'static str),
    #[error("invalid product id {0:?}")]
    InvalidId(String),
    #[error("invalid product price {0:?}")]
    InvalidPrice(String),
}

/// One purchasable item as declared by its page container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
}

impl ProductCard {
    /// Create a card from already-typed values.
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
        }
    }

    /// Parse a card from its container's data attributes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an attribute is absent or not an integer of
    /// the expected sign.
    pub fn from_data_attrs(
        id: Option<&str>,
        name: Option<&str>,
        price: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let id = id.ok_or(CatalogError::MissingAttr("data-id"))?;
        let name = name.ok_or(CatalogError::MissingAttr("data-name"))?;
        let price = price.ok_or(CatalogError::MissingAttr("data-price"))?;

        let id: i32 = id
            .trim()
            .parse()
            .map_err(|_| CatalogError::InvalidId(id.to_string()))?;
        let price: u64 = price
            .trim()
            .parse()
            .map_err(|_| CatalogError::InvalidPrice(price.to_string()))?;

        Ok(Self {
            id: ProductId::new(id),
            name: name.to_string(),
            unit_price: Money::new(price),
        })
    }
}
