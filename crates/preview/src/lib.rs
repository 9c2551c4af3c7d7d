//! Live tag preview.
//!
//! Holds the product being edited and a view model derived from it. Every
//! mutation rebuilds the whole view model before returning, so the preview can
//! never be observed out of sync with the product.

pub mod event;
pub mod render;
pub mod synchronizer;
pub mod view_model;

pub use event::{ChangeCause, PreviewUpdated};
pub use render::TextTagRenderer;
pub use synchronizer::PreviewSynchronizer;
pub use view_model::{PreviewOptions, ViewModel};
