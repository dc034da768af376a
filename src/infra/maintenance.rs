//! Batch cleanup for the product table.

use log::info;

use super::store::{ProductStore, StoreError};

/// Remove every product whose strategy shares are all zero. Logs the rows
/// about to be dropped and returns how many were removed.
pub fn purge_zero_products(store: &ProductStore) -> Result<usize, StoreError> {
    let candidates: Vec<String> = store
        .list()
        .into_iter()
        .filter(|product| product.is_all_zero())
        .map(|product| product.name)
        .collect();

    if candidates.is_empty() {
        info!("no all-zero products to remove");
        return Ok(0);
    }

    info!("removing all-zero products: {}", candidates.join(", "));
    let removed = store.delete_all_zero()?;
    info!("removed {removed} products");
    Ok(removed)
}
