//! External boundaries of the tag designer.
//!
//! Persistence, identifier generation and image acquisition are traits here,
//! each with an in-process implementation. Failures are reported as
//! [`BoundaryError`] and are always recoverable: callers keep their in-memory
//! state and may retry.

pub mod error;
pub mod identifier;
pub mod image;
pub mod product_store;

pub use error::BoundaryError;
pub use identifier::{IdentifierSource, RandomIdentifierSource};
pub use image::{ImageSource, LocalImageSource};
pub use product_store::{InMemoryProductStore, ProductStore};
