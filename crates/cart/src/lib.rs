//! Velomir cart widget.
//!
//! A headless rendition of the shop's client-side cart: an in-memory list of
//! selected items, mirrored to a persistent store and projected into page
//! regions (a badge and a modal item list). The widget is event-driven -
//! discrete UI events are its only inputs, re-renders and storage writes its
//! only outputs.
//!
//! The surrounding page and the storage mechanism are collaborators, not
//! parts of the widget; they sit behind the [`page::PageDom`] and
//! [`storage::CartStore`] seams. [`page::MemoryPage`] and
//! [`storage::MemoryStore`] are the in-memory implementations used by tests
//! and the terminal demo.
//!
//! # Example
//!
//! ```
//! use velomir_cart::catalog::ProductCard;
//! use velomir_cart::config::WidgetConfig;
//! use velomir_cart::controller::CartController;
//! use velomir_cart::events::CartEvent;
//! use velomir_cart::page::MemoryPage;
//! use velomir_cart::storage::MemoryStore;
//! use velomir_core::{Money, ProductId};
//!
//! let mut controller = CartController::new(
//!     WidgetConfig::default(),
//!     MemoryStore::new(),
//!     MemoryPage::new(),
//! )?;
//!
//! let card = ProductCard::new(ProductId::new(1), "Bike A", Money::new(3000));
//! controller.dispatch(CartEvent::add(&card))?;
//! assert_eq!(controller.cart().len(), 1);
//! # Ok::<(), velomir_cart::error::WidgetError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod page;
pub mod render;
pub mod storage;
pub mod view;

pub use config::WidgetConfig;
pub use controller::{CartController, ModalState};
pub use error::WidgetError;
pub use events::CartEvent;
