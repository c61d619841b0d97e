//! Persistence adapter.
//!
//! The widget mirrors the cart to a key-value store after every mutation -
//! no batching, no debounce. The store itself is a seam: the page supplies
//! whatever mechanism it has (local storage on a browser page;
//! [`FileStore`] in the terminal demo; [`MemoryStore`] in tests).
//!
//! Loading fails soft: a missing key, an unreadable store, or a payload of
//! the wrong shape all yield an empty cart and never an error to the caller.
//! Corrupt payloads are reported through `tracing` so non-production builds
//! surface them; there is deliberately no user-visible difference between
//! "no prior cart" and "corrupted cart".

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use velomir_core::{Cart, LineItem};

/// Storage keys used by the widget.
pub mod keys {
    /// Key the serialized cart lives under.
    pub const CART: &str = "cart";
}

/// Errors from the underlying store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A string key-value store, the shape of browser-local storage.
pub trait CartStore {
    /// Read the value under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read at all.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, overwriting prior content.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write does not reach the store.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the deletion does not reach the store.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl CartStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object of key-value pairs.
///
/// The terminal demo's stand-in for browser-local storage; cart state
/// survives between runs. A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl CartStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

/// Load the persisted cart, failing soft to empty.
///
/// Lines persisted with a non-positive quantity (only possible through
/// outside edits of the store) are dropped so the in-memory invariant holds
/// from the first render.
#[must_use]
pub fn load_cart(store: &impl CartStore, key: &str) -> Cart {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(error) => {
            tracing::warn!(%error, "cart store unreadable, starting empty");
            return Cart::new();
        }
    };
    match serde_json::from_str::<Vec<LineItem>>(&raw) {
        Ok(mut items) => {
            let before = items.len();
            items.retain(|item| item.quantity > 0);
            if items.len() < before {
                tracing::warn!(
                    dropped = before - items.len(),
                    "discarded persisted lines with zero quantity"
                );
            }
            Cart::from_items(items)
        }
        Err(error) => {
            tracing::warn!(%error, "discarding unreadable persisted cart");
            Cart::new()
        }
    }
}

/// Serialize the full cart and overwrite the stored value.
///
/// # Errors
///
/// Returns `StoreError` if serialization or the store write fails.
pub fn save_cart(store: &mut impl CartStore, key: &str, cart: &Cart) -> Result<(), StoreError> {
    let raw = serde_json::to_string(cart.items())?;
    store.set(key, &raw)
}
