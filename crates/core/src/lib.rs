//! Velomir Core - Shared types library.
//!
//! This crate provides the common types used across the Velomir cart
//! components:
//! - `cart` - The headless cart widget library
//! - `cli` - Terminal demo of the widget
//!
//! # Architecture
//!
//! The core crate contains only types and pure computation - no I/O, no
//! rendering, no storage access. Everything here can be exercised without a
//! page or a store.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product ids and money
//! - [`cart`] - The cart itself: line items, mutation operations, totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::*;
pub use types::*;
