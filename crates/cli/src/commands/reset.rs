//! Clear the persisted cart.

use std::error::Error;
use std::path::Path;

use velomir_cart::storage::{CartStore, FileStore, keys};

/// Remove the stored cart entry, leaving the rest of the store file alone.
pub fn run(store_path: &Path) -> Result<(), Box<dyn Error>> {
    let mut store = FileStore::new(store_path);
    store.remove(keys::CART)?;
    tracing::info!("cleared persisted cart at {}", store_path.display());
    Ok(())
}
