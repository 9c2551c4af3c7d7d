//! Pseudo-barcode encoding for product tags.
//!
//! This crate turns an identifier string into a sequence of bar descriptors,
//! implemented as a pure, deterministic function (no IO, no rendering). It is a
//! visual placeholder, not a real symbology: there is no checksum and no
//! scannability guarantee.

pub mod encoder;
pub mod pattern;

pub use encoder::{digit_value, encode};
pub use pattern::{BarDescriptor, BarHeight, BarWidth, Pattern};
