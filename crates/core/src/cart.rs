//! The cart: line items, mutation operations, and derived totals.
//!
//! A [`Cart`] is an ordered sequence of [`LineItem`]s with at most one entry
//! per product id. Insertion order is the order products were first added and
//! is preserved across quantity updates; it is also the render order.
//!
//! Everything here is pure state manipulation. Rendering and persistence live
//! in the `velomir-cart` crate and run after each mutation.

use serde::{Deserialize, Serialize};

use crate::types::{Money, ProductId};

/// One distinct purchasable entry in the cart with its quantity.
///
/// The quantity is at least 1 while the item is present; operations that
/// would drive it to zero remove the item instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog item identifier, unique per distinct product.
    pub id: ProductId,
    /// Product name as declared by the page at add time.
    pub name: String,
    /// Unit price in minor currency units, trusted verbatim from the caller.
    #[serde(rename = "price")]
    pub unit_price: Money,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl LineItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// Flat-fee shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Fee charged when the subtotal does not clear the threshold.
    pub flat_fee: Money,
    /// Subtotals strictly above this amount ship free.
    pub free_over: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            flat_fee: Money::new(500),
            free_over: Money::new(5000),
        }
    }
}

/// Derived cart totals. All zero for an empty cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of quantities across all line items.
    pub item_count: u32,
    /// Sum of unit price times quantity across all line items.
    pub subtotal: Money,
    /// Shipping fee under the policy, zero when waived.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

/// The ordered collection of line items for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from already-validated line items.
    ///
    /// Ids are trusted to be unique and quantities positive, as written by
    /// the persistence adapter; this does not re-validate.
    #[must_use]
    pub const fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new line is appended with quantity 1. Name and price are
    /// stored as given at call time.
    pub fn add(&mut self, id: ProductId, name: impl Into<String>, unit_price: Money) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem {
                id,
                name: name.into(),
                unit_price,
                quantity: 1,
            });
        }
    }

    /// Remove a product's line entirely. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.id != id);
    }

    /// Adjust a product's quantity by `delta`. No-op if absent.
    ///
    /// A resulting quantity of zero or less removes the line; a zero-quantity
    /// entry is never kept.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        let next = i64::from(item.quantity).saturating_add(delta);
        if next <= 0 {
            self.remove(id);
        } else {
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart. Used by checkout.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Compute derived totals under a shipping policy.
    ///
    /// An empty cart reports all-zero totals; the shipping fee only applies
    /// once something is in the cart.
    #[must_use]
    pub fn totals(&self, policy: &ShippingPolicy) -> CartTotals {
        if self.items.is_empty() {
            return CartTotals::default();
        }
        let item_count = self
            .items
            .iter()
            .map(|item| item.quantity)
            .fold(0u32, u32::saturating_add);
        let subtotal: Money = self.items.iter().map(LineItem::line_total).sum();
        let shipping = if subtotal > policy.free_over {
            Money::ZERO
        } else {
            policy.flat_fee
        };
        CartTotals {
            item_count,
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}
