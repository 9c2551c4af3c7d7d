//! Persistence boundary for product records.

pub mod in_memory;

use std::sync::Arc;

use tagforge_core::ProductId;
use tagforge_products::{ProductDraft, StoredProduct};

use crate::error::BoundaryError;

pub use in_memory::InMemoryProductStore;

/// Product persistence.
///
/// `create` takes a product-shaped payload and returns the stored record with a
/// store-assigned id. A failed call must not have stored anything.
pub trait ProductStore: Send + Sync {
    fn create(&self, product: ProductDraft) -> Result<StoredProduct, BoundaryError>;

    /// `Ok(None)` when no record has this id.
    fn get(&self, id: ProductId) -> Result<Option<StoredProduct>, BoundaryError>;

    /// All records, oldest first.
    fn list(&self) -> Result<Vec<StoredProduct>, BoundaryError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn create(&self, product: ProductDraft) -> Result<StoredProduct, BoundaryError> {
        (**self).create(product)
    }

    fn get(&self, id: ProductId) -> Result<Option<StoredProduct>, BoundaryError> {
        (**self).get(id)
    }

    fn list(&self) -> Result<Vec<StoredProduct>, BoundaryError> {
        (**self).list()
    }
}
