//! File-backed product strategy store.
//!
//! The r-strategies table lives in a single JSON document written
//! atomically (temp file + rename). Readers and the single writer share an
//! interior lock, so `list` never observes a half-written row.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use log::{debug, info, warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Product;

const STORE_FILENAME: &str = "building_data.json";
const STORE_DIRNAME: &str = "building-circularity-tool";

#[derive(Debug, Error)]
pub enum StoreError {
    /// A numeric field on the inserted row was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    ConstraintViolation { field: &'static str, value: f64 },
    /// The backing file could not be read or written. The mutation did not
    /// take effect; the caller must not assume data loss.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] io::Error),
}

/// On-disk shape of the store: creation stamp plus the table rows.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    created_at: u64,
    products: Vec<Product>,
}

/// Persisted table of per-product circularity strategies.
pub struct ProductStore {
    path: PathBuf,
    created_at: u64,
    products: Mutex<Vec<Product>>,
}

impl ProductStore {
    /// Open the store at `path`, seeding the example rows when no table
    /// exists there yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let (created_at, products) = match fs::read_to_string(&path) {
            Ok(content) => {
                let file: StoreFile =
                    serde_json::from_str(&content).map_err(io::Error::from)?;
                debug!(
                    "loaded {} products from {}",
                    file.products.len(),
                    path.display()
                );
                (file.created_at, file.products)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let created_at = unix_now();
                let seeded = seed_products();
                info!("seeding product store at {}", path.display());
                write_table(&path, created_at, &seeded)?;
                (created_at, seeded)
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            created_at,
            products: Mutex::new(products),
        })
    }

    /// Open the store at its default location in the local app-data
    /// directory.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(default_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full table read in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.products.lock().clone()
    }

    /// Append a row. The row becomes visible to `list` only once the
    /// backing file write succeeded; on failure it is rolled back and the
    /// error is returned to the caller.
    pub fn insert(&self, product: Product) -> Result<(), StoreError> {
        if let Some((field, value)) = product.non_finite_field() {
            return Err(StoreError::ConstraintViolation { field, value });
        }

        let mut products = self.products.lock();
        products.push(product);
        if let Err(err) = write_table(&self.path, self.created_at, &products) {
            products.pop();
            warn!("insert failed, row rolled back: {err}");
            return Err(err);
        }
        debug!("inserted product ({} rows total)", products.len());
        Ok(())
    }

    /// Remove every row whose four strategy shares are all exactly zero and
    /// return how many were removed. A second call removes nothing.
    pub fn delete_all_zero(&self) -> Result<usize, StoreError> {
        let mut products = self.products.lock();
        let kept: Vec<Product> = products
            .iter()
            .filter(|product| !product.is_all_zero())
            .cloned()
            .collect();
        let removed = products.len() - kept.len();
        if removed == 0 {
            return Ok(0);
        }

        let previous = std::mem::replace(&mut *products, kept);
        if let Err(err) = write_table(&self.path, self.created_at, &products) {
            *products = previous;
            warn!("cleanup failed, table restored: {err}");
            return Err(err);
        }
        debug!("removed {removed} all-zero products");
        Ok(removed)
    }
}

/// Example rows a fresh table starts with.
fn seed_products() -> Vec<Product> {
    vec![
        Product::new("Product 1", 0.1, 0.2, 0.3, 0.4),
        Product::new("Product 2", 0.25, 0.25, 0.25, 0.25),
        Product::new("Product 3", 0.9, 0.0, 0.1, 0.0),
    ]
}

fn default_path() -> Result<PathBuf, StoreError> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no local data directory"))?
        .join(STORE_DIRNAME);
    fs::create_dir_all(&base)?;
    Ok(base.join(STORE_FILENAME))
}

fn write_table(path: &Path, created_at: u64, products: &[Product]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = StoreFile {
        created_at,
        products: products.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file).map_err(io::Error::from)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ProductStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProductStore::open(dir.path().join(STORE_FILENAME)).unwrap();
        (dir, store)
    }

    #[test]
    fn fresh_store_is_seeded_with_example_rows() {
        let (_dir, store) = temp_store();
        let products = store.list();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0], Product::new("Product 1", 0.1, 0.2, 0.3, 0.4));
        assert_eq!(products[2], Product::new("Product 3", 0.9, 0.0, 0.1, 0.0));
        assert!(store.path().exists());
    }

    #[test]
    fn insert_then_list_round_trips_exactly() {
        let (_dir, store) = temp_store();
        let product = Product::new("Facade panel", 0.4, 0.1, 0.35, 0.15);
        store.insert(product.clone()).unwrap();

        let products = store.list();
        assert_eq!(products.len(), 4);
        assert_eq!(products[3], product);
    }

    #[test]
    fn reopening_preserves_inserted_rows_without_reseeding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILENAME);

        let store = ProductStore::open(&path).unwrap();
        store
            .insert(Product::new("Product 4", 0.5, 0.2, 0.2, 0.1))
            .unwrap();
        drop(store);

        let reopened = ProductStore::open(&path).unwrap();
        let products = reopened.list();
        assert_eq!(products.len(), 4);
        assert_eq!(products[3].name, "Product 4");
    }

    #[test]
    fn non_finite_fields_violate_the_constraint() {
        let (_dir, store) = temp_store();
        let err = store
            .insert(Product::new("Broken", f64::NAN, 0.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::ConstraintViolation { field: "Virgin", .. }
        ));
        // The rejected row never shows up.
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn delete_all_zero_removes_only_zero_rows_and_is_idempotent() {
        let (_dir, store) = temp_store();
        store
            .insert(Product::new("Product 4", 0.0, 0.0, 0.0, 0.0))
            .unwrap();
        store
            .insert(Product::new("Product 5", 0.0, 0.0, 0.0, 0.0))
            .unwrap();

        assert_eq!(store.delete_all_zero().unwrap(), 2);
        assert_eq!(store.list().len(), 3);
        assert!(store.list().iter().all(|p| !p.is_all_zero()));

        assert_eq!(store.delete_all_zero().unwrap(), 0);
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn corrupt_table_reports_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILENAME);
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ProductStore::open(&path),
            Err(StoreError::Unavailable(_))
        ));
    }
}
