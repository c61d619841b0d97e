//! Core types for Velomir.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;

pub use id::ProductId;
pub use money::{Currency, Money};
