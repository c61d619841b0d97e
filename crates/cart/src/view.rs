//! View models: pure projection of cart state into display data.
//!
//! Totals and money formatting happen here, before any markup exists, so
//! they are testable without touching the templates or a page. Templates and
//! text regions receive pre-formatted strings only.

use velomir_core::{Cart, CartTotals, Currency, ProductId};

/// Label shown when shipping is waived (or the cart is empty).
pub const FREE_SHIPPING_LABEL: &str = "Free";

/// Cart row display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
}

/// Cart display data: rows plus independently formatted summary strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

impl CartView {
    /// Project cart state and its totals into display data.
    #[must_use]
    pub fn project(cart: &Cart, totals: &CartTotals, currency: Currency) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|item| CartItemView {
                id: item.id,
                name: item.name.clone(),
                unit_price: currency.format(item.unit_price),
                quantity: item.quantity,
            })
            .collect();
        Self {
            items,
            item_count: totals.item_count,
            subtotal: currency.format(totals.subtotal),
            shipping: if totals.shipping.is_zero() {
                FREE_SHIPPING_LABEL.to_string()
            } else {
                currency.format(totals.shipping)
            },
            total: currency.format(totals.total),
        }
    }
}

/// A blocking user notice, the page's alert affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Checkout was attempted on an empty cart.
    EmptyCart,
    /// The order went through; the cart is about to be cleared.
    OrderConfirmed { item_count: u32, total: String },
}

impl Notice {
    /// The message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::EmptyCart => "Your cart is empty!".to_string(),
            Self::OrderConfirmed { item_count, total } => format!(
                "Order placed!\n\nItems: {item_count}\nOrder total: {total}\n\nThank you for your purchase!"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velomir_core::{Money, ShippingPolicy};

    fn project(cart: &Cart) -> CartView {
        let totals = cart.totals(&ShippingPolicy::default());
        CartView::project(cart, &totals, Currency::Rub)
    }

    #[test]
    fn formats_each_summary_string_independently() {
        let mut cart = Cart::new();
        cart.add(ProductId::new(5), "Helmet", Money::new(1000));
        let view = project(&cart);

        assert_eq!(view.item_count, 1);
        assert_eq!(view.subtotal, "1\u{a0}000 \u{20bd}");
        assert_eq!(view.shipping, "500 \u{20bd}");
        assert_eq!(view.total, "1\u{a0}500 \u{20bd}");
        assert_eq!(view.items[0].unit_price, "1\u{a0}000 \u{20bd}");
    }

    #[test]
    fn waived_shipping_uses_the_free_sentinel() {
        let mut cart = Cart::new();
        cart.add(ProductId::new(1), "Bike A", Money::new(3000));
        cart.add(ProductId::new(2), "Bike B", Money::new(2500));
        cart.add(ProductId::new(1), "Bike A", Money::new(3000));
        let view = project(&cart);

        assert_eq!(view.shipping, FREE_SHIPPING_LABEL);
        assert_eq!(view.subtotal, "8\u{a0}500 \u{20bd}");
        assert_eq!(view.total, "8\u{a0}500 \u{20bd}");
    }

    #[test]
    fn empty_cart_projects_zero_amounts() {
        let view = project(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "0 \u{20bd}");
        assert_eq!(view.total, "0 \u{20bd}");
    }

    #[test]
    fn confirmation_notice_carries_count_and_total() {
        let message = Notice::OrderConfirmed {
            item_count: 3,
            total: "8\u{a0}500 \u{20bd}".to_string(),
        }
        .message();
        assert!(message.contains("Items: 3"));
        assert!(message.contains("8\u{a0}500 \u{20bd}"));
    }
}
