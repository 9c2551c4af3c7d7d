//! Domain foundation building blocks for `tagforge`.
//!
//! This crate contains **pure domain** primitives shared by the tag designer
//! crates (no IO, no rendering, no storage).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
