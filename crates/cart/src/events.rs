//! The widget's event model.
//!
//! Page events arrive as [`CartEvent`] values. Controls inside the rendered
//! item list are wired by delegation: each carries `data-action` and
//! `data-id` attributes, the page binds a single listener on the items
//! container, and [`item_action`] maps the clicked control's attributes to
//! an event. Nothing is exposed on a global namespace.
//!
//! [`CartEvent::ScrimClick`] must only be emitted when the click target is
//! the modal container itself, not its content; the adapter owns that test
//! because raw click targets never cross the page seam.

use thiserror::Error;

use velomir_core::{Money, ProductId};

use crate::catalog::ProductCard;

/// Action names rendered into item-list controls.
pub mod actions {
    pub const INCREMENT: &str = "increment";
    pub const DECREMENT: &str = "decrement";
    pub const REMOVE: &str = "remove";
}

/// Errors mapping delegated click attributes to an event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("missing data attribute: {0}")]
    MissingAttr(&'static str),
    #[error("unknown cart action {0:?}")]
    UnknownAction(String),
    #[error("invalid item id {0:?}")]
    InvalidId(String),
}

/// A discrete UI event driving the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// Buy button on a product card.
    AddToCart {
        id: ProductId,
        name: String,
        unit_price: Money,
    },
    /// Remove control on a cart row.
    RemoveItem { id: ProductId },
    /// Quantity control on a cart row.
    ChangeQuantity { id: ProductId, delta: i64 },
    /// The cart affordance was activated.
    OpenCart,
    /// The modal close control was activated.
    CloseCart,
    /// The "continue shopping" control was activated.
    ContinueShopping,
    /// The modal's background scrim was clicked.
    ScrimClick,
    /// The checkout trigger was activated. Pages without that control
    /// simply never produce this event.
    Checkout,
}

impl CartEvent {
    /// Build the add event for a product card's buy button.
    #[must_use]
    pub fn add(card: &ProductCard) -> Self {
        Self::AddToCart {
            id: card.id,
            name: card.name.clone(),
            unit_price: card.unit_price,
        }
    }
}

/// Map a delegated click inside the items container to an event.
///
/// `action` and `id` are the clicked control's `data-action` and `data-id`
/// attributes.
///
/// # Errors
///
/// Returns `EventError` if either attribute is absent, the action is not one
/// of [`actions`], or the id is not an integer.
pub fn item_action(action: Option<&str>, id: Option<&str>) -> Result<CartEvent, EventError> {
    let action = action.ok_or(EventError::MissingAttr("data-action"))?;
    let id = id.ok_or(EventError::MissingAttr("data-id"))?;
    let id: i32 = id
        .trim()
        .parse()
        .map_err(|_| EventError::InvalidId(id.to_string()))?;
    let id = ProductId::new(id);

    match action {
        actions::INCREMENT => Ok(CartEvent::ChangeQuantity { id, delta: 1 }),
        actions::DECREMENT => Ok(CartEvent::ChangeQuantity { id, delta: -1 }),
        actions::REMOVE => Ok(CartEvent::RemoveItem { id }),
        other => Err(EventError::UnknownAction(other.to_string())),
    }
}
