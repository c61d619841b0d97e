//! The cart controller: owns all widget state and drives the
//! mutate -> recount -> re-render -> persist pipeline.
//!
//! Everything is synchronous and runs to completion per event; the store is
//! written at the end of every mutation, so persisted state always reflects
//! the latest in-memory state by the time another load could happen.

use velomir_core::Cart;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::events::CartEvent;
use crate::page::{Hook, PageDom, classes};
use crate::render::render;
use crate::storage::{CartStore, load_cart, save_cart};
use crate::view::{CartView, Notice};

/// Modal visibility. Initial state is `Closed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    Open,
    #[default]
    Closed,
}

/// The cart widget controller.
///
/// Holds the one mutable [`Cart`] and exposes it only through event
/// dispatch; external code never mutates cart state directly.
pub struct CartController<S, P> {
    config: WidgetConfig,
    cart: Cart,
    modal: ModalState,
    store: S,
    page: P,
}

impl<S: CartStore, P: PageDom> CartController<S, P> {
    /// Create the controller: validate configuration, load the persisted
    /// cart (empty on missing or invalid data), and render the initial
    /// badge and modal regions.
    ///
    /// # Errors
    ///
    /// Returns `WidgetError` if the configuration is invalid or the initial
    /// render fails.
    pub fn new(config: WidgetConfig, store: S, page: P) -> Result<Self, WidgetError> {
        config.validate()?;
        let cart = load_cart(&store, &config.storage_key);
        let mut controller = Self {
            config,
            cart,
            modal: ModalState::Closed,
            store,
            page,
        };
        controller.render_page()?;
        Ok(controller)
    }

    /// Handle one UI event to completion.
    ///
    /// # Errors
    ///
    /// Returns `WidgetError` only if re-rendering fails; cart operations
    /// themselves cannot fail (unknown ids are silent no-ops).
    pub fn dispatch(&mut self, event: CartEvent) -> Result<(), WidgetError> {
        tracing::debug!(?event, "dispatching cart event");
        match event {
            CartEvent::AddToCart {
                id,
                name,
                unit_price,
            } => {
                self.cart.add(id, name, unit_price);
                self.sync()
            }
            CartEvent::RemoveItem { id } => {
                self.cart.remove(id);
                self.sync()
            }
            CartEvent::ChangeQuantity { id, delta } => {
                self.cart.change_quantity(id, delta);
                self.sync()
            }
            CartEvent::OpenCart => {
                self.set_modal(ModalState::Open);
                Ok(())
            }
            CartEvent::CloseCart | CartEvent::ContinueShopping | CartEvent::ScrimClick => {
                self.set_modal(ModalState::Closed);
                Ok(())
            }
            CartEvent::Checkout => self.checkout(),
        }
    }

    /// Place the order: warn on an empty cart, otherwise confirm, clear,
    /// persist, and close the modal.
    fn checkout(&mut self) -> Result<(), WidgetError> {
        if self.cart.is_empty() {
            self.page.show_notice(&Notice::EmptyCart.message());
            return Ok(());
        }
        let totals = self.cart.totals(&self.config.shipping);
        tracing::info!(
            items = totals.item_count,
            total = %totals.total,
            "order placed"
        );
        let notice = Notice::OrderConfirmed {
            item_count: totals.item_count,
            total: self.config.currency.format(totals.total),
        };
        self.page.show_notice(&notice.message());
        self.cart.clear();
        self.sync()?;
        self.set_modal(ModalState::Closed);
        Ok(())
    }

    /// Post-mutation pipeline: re-render, then persist.
    fn sync(&mut self) -> Result<(), WidgetError> {
        self.render_page()?;
        self.persist();
        Ok(())
    }

    /// Project current state and write every page region.
    fn render_page(&mut self) -> Result<(), WidgetError> {
        let totals = self.cart.totals(&self.config.shipping);
        let view = CartView::project(&self.cart, &totals, self.config.currency);
        let rendered = render(&view)?;

        self.page.set_text(Hook::CartCount, &rendered.badge_count);
        self.page
            .set_text(Hook::BadgeSubtotal, &rendered.badge_subtotal);
        self.page.set_html(Hook::CartItems, &rendered.items_html);
        self.page.set_text(Hook::Subtotal, &rendered.subtotal);
        self.page.set_text(Hook::Shipping, &rendered.shipping);
        self.page.set_text(Hook::Total, &rendered.total);
        Ok(())
    }

    /// Mirror the cart to the store. A store that stops accepting writes
    /// does not interrupt the session; in-memory state stays authoritative
    /// and the failure is logged.
    fn persist(&mut self) {
        if let Err(error) = save_cart(&mut self.store, &self.config.storage_key, &self.cart) {
            tracing::warn!(%error, "failed to persist cart");
        }
    }

    fn set_modal(&mut self, state: ModalState) {
        self.modal = state;
        let open = matches!(state, ModalState::Open);
        self.page
            .set_class(Hook::CartModal, classes::MODAL_OPEN, open);
        self.page.set_class(Hook::Body, classes::SCROLL_LOCK, open);
    }

    /// Current cart state, read-only.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current modal state.
    #[must_use]
    pub const fn modal(&self) -> ModalState {
        self.modal
    }

    /// The page adapter, for reading back rendered output.
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;
    use crate::storage::{MemoryStore, keys};
    use velomir_core::{Money, ProductId};

    fn controller() -> CartController<MemoryStore, MemoryPage> {
        CartController::new(WidgetConfig::default(), MemoryStore::new(), MemoryPage::new()).unwrap()
    }

    fn add_event(id: i32, name: &str, price: u64) -> CartEvent {
        CartEvent::AddToCart {
            id: ProductId::new(id),
            name: name.to_string(),
            unit_price: Money::new(price),
        }
    }

    #[test]
    fn construction_renders_before_any_event() {
        let c = controller();
        assert_eq!(c.page().text(Hook::CartCount), Some("0"));
        assert!(c.page().html(Hook::CartItems).unwrap().contains("empty-cart"));
        assert_eq!(c.modal(), ModalState::Closed);
    }

    #[test]
    fn construction_does_not_write_the_store() {
        let c = controller();
        assert!(c.store().get(keys::CART).unwrap().is_none());
    }

    #[test]
    fn every_mutation_rerenders_and_persists() {
        let mut c = controller();
        c.dispatch(add_event(1, "Bike A", 3000)).unwrap();

        assert_eq!(c.page().text(Hook::CartCount), Some("1"));
        assert_eq!(c.page().text(Hook::Subtotal), Some("3\u{a0}000 \u{20bd}"));
        assert_eq!(c.page().text(Hook::Shipping), Some("500 \u{20bd}"));
        assert_eq!(c.page().text(Hook::Total), Some("3\u{a0}500 \u{20bd}"));

        let raw = c.store().get(keys::CART).unwrap().unwrap();
        assert!(raw.contains(r#""price":3000"#));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = WidgetConfig {
            storage_key: String::new(),
            ..WidgetConfig::default()
        };
        let result = CartController::new(config, MemoryStore::new(), MemoryPage::new());
        assert!(matches!(result, Err(WidgetError::Config(_))));
    }

    #[test]
    fn loads_persisted_state_at_construction() {
        let store = MemoryStore::with_entry(
            keys::CART,
            r#"[{"id":1,"name":"Bike A","price":3000,"quantity":2}]"#,
        );
        let c = CartController::new(WidgetConfig::default(), store, MemoryPage::new()).unwrap();
        assert_eq!(c.cart().len(), 1);
        assert_eq!(c.page().text(Hook::CartCount), Some("2"));
        assert_eq!(c.page().text(Hook::BadgeSubtotal), Some("6\u{a0}000 \u{20bd}"));
    }

    #[test]
    fn modal_transitions_toggle_page_classes() {
        let mut c = controller();
        c.dispatch(CartEvent::OpenCart).unwrap();
        assert_eq!(c.modal(), ModalState::Open);
        assert!(c.page().has_class(Hook::CartModal, classes::MODAL_OPEN));
        assert!(c.page().has_class(Hook::Body, classes::SCROLL_LOCK));

        c.dispatch(CartEvent::ScrimClick).unwrap();
        assert_eq!(c.modal(), ModalState::Closed);
        assert!(!c.page().has_class(Hook::CartModal, classes::MODAL_OPEN));
        assert!(!c.page().has_class(Hook::Body, classes::SCROLL_LOCK));
    }
}
