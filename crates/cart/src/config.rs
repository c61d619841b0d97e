//! Widget configuration.
//!
//! The widget takes no environment input; configuration is a plain value
//! whose defaults match the shop page it was written for.

use thiserror::Error;

use velomir_core::{Currency, ShippingPolicy};

use crate::storage;

/// Configuration errors reported by [`WidgetConfig::validate`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

/// Cart widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Storage key the serialized cart lives under.
    pub storage_key: String,
    /// Currency used for every formatted amount.
    pub currency: Currency,
    /// Flat-fee shipping rule applied to non-empty carts.
    pub shipping: ShippingPolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: storage::keys::CART.to_string(),
            currency: Currency::default(),
            shipping: ShippingPolicy::default(),
        }
    }
}

impl WidgetConfig {
    /// Check the configuration for values the widget cannot operate with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the storage key is empty or whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }
}
