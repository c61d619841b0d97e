//! End-to-end tests for the Velomir cart widget.
//!
//! Tests drive a real [`CartController`] through [`CartEvent`]s exactly as a
//! page would, with the in-memory store and page adapters, then assert on
//! cart state, the recorded page regions, and the persisted payload.
//!
//! # Test Categories
//!
//! - `cart_flow` - Mutation pipeline scenarios
//! - `modal` - Modal state machine transitions
//! - `checkout` - Checkout warning and confirmation flows
//! - `persistence` - Storage round-trips and soft-fail loading

#![cfg_attr(not(test), forbid(unsafe_code))]

use velomir_cart::catalog::ProductCard;
use velomir_cart::config::WidgetConfig;
use velomir_cart::controller::CartController;
use velomir_cart::events::CartEvent;
use velomir_cart::page::MemoryPage;
use velomir_cart::storage::{CartStore, MemoryStore, keys};
use velomir_core::{Money, ProductId};

/// A controller wired to in-memory collaborators, plus shortcuts for the
/// events the shop page produces.
pub struct TestContext {
    pub controller: CartController<MemoryStore, MemoryPage>,
}

impl TestContext {
    /// Fresh context: default configuration, nothing persisted.
    ///
    /// # Panics
    ///
    /// Panics if the controller rejects the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Context over a pre-seeded store.
    ///
    /// # Panics
    ///
    /// Panics if the controller rejects the default configuration.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn with_store(store: MemoryStore) -> Self {
        let controller =
            CartController::new(WidgetConfig::default(), store, MemoryPage::new()).unwrap();
        Self { controller }
    }

    /// Press the buy button for a product card.
    ///
    /// # Panics
    ///
    /// Panics if dispatch fails; event handling is infallible in these
    /// tests short of a template bug.
    pub fn buy(&mut self, id: i32, name: &str, price: u64) {
        let card = ProductCard::new(ProductId::new(id), name, Money::new(price));
        self.dispatch(CartEvent::add(&card));
    }

    /// Dispatch any event, panicking on render failure.
    ///
    /// # Panics
    ///
    /// Panics if dispatch fails.
    #[allow(clippy::unwrap_used)]
    pub fn dispatch(&mut self, event: CartEvent) {
        self.controller.dispatch(event).unwrap();
    }

    /// The page the widget rendered into.
    #[must_use]
    pub fn page(&self) -> &MemoryPage {
        self.controller.page()
    }

    /// The raw persisted payload, if any mutation has run.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory store errors, which it cannot.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn stored_raw(&self) -> Option<String> {
        self.controller.store().get(keys::CART).unwrap()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
