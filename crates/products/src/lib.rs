//! Products domain module for the tag designer.
//!
//! This crate contains the editable product draft, the field model used by the
//! editing form and the shape of a persisted record, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod field;
pub mod price;
pub mod product;
pub mod record;

pub use field::{FieldValue, ProductField};
pub use price::Price;
pub use product::ProductDraft;
pub use record::StoredProduct;
