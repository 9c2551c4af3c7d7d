//! Editor session: the live preview plus its external boundaries.

use std::path::Path;

use thiserror::Error;

use tagforge_core::{DomainError, ProductId};
use tagforge_events::Subscription;
use tagforge_infra::{BoundaryError, IdentifierSource, ImageSource, ProductStore};
use tagforge_preview::{PreviewSynchronizer, PreviewUpdated, ViewModel};
use tagforge_products::{FieldValue, ProductDraft, ProductField, StoredProduct};

use crate::config::EditorConfig;

/// Recoverable editor failure.
///
/// Whatever the variant, the product and preview are exactly as they were
/// before the failed call, so the operator can simply retry.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to save product: {0}")]
    Save(#[source] BoundaryError),

    #[error("failed to load product {id}: {source}")]
    Load {
        id: ProductId,
        #[source]
        source: BoundaryError,
    },

    #[error("failed to list products: {0}")]
    List(#[source] BoundaryError),

    #[error("failed to generate identifier: {0}")]
    GenerateIdentifier(#[source] BoundaryError),

    #[error("failed to attach image: {0}")]
    AttachImage(#[source] BoundaryError),

    #[error("failed to serialize preview: {0}")]
    SerializePreview(#[source] serde_json::Error),
}

/// One tag designer session.
#[derive(Debug)]
pub struct TagEditor<S, G> {
    preview: PreviewSynchronizer,
    store: S,
    identifiers: G,
    saved: Option<StoredProduct>,
}

impl<S, G> TagEditor<S, G>
where
    S: ProductStore,
    G: IdentifierSource,
{
    pub fn new(config: &EditorConfig, store: S, identifiers: G) -> Self {
        Self {
            preview: PreviewSynchronizer::with_options(
                config.initial_product(),
                config.preview_options(),
            ),
            store,
            identifiers,
            saved: None,
        }
    }

    pub fn edit(&mut self, field: ProductField, value: impl Into<FieldValue>) {
        self.preview.set_field(field, value);
    }

    pub fn edit_named(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), EditorError> {
        self.preview.set_field_named(name, value)?;
        Ok(())
    }

    /// Start over with an empty tag ("New Tag").
    pub fn new_tag(&mut self) {
        self.preview.reset(ProductDraft::empty());
        self.saved = None;
        tracing::info!("started new tag");
    }

    /// Replace the identifier with one from the identifier source.
    pub fn generate_identifier(&mut self) -> Result<(), EditorError> {
        let identifier = self.identifiers.generate().map_err(|e| {
            tracing::warn!(error = %e, "identifier generation failed");
            EditorError::GenerateIdentifier(e)
        })?;

        self.preview.regenerate_identifier(identifier);
        Ok(())
    }

    /// Acquire an image through `source` and store its reference.
    pub fn attach_image<I>(&mut self, source: &I, path: &Path) -> Result<(), EditorError>
    where
        I: ImageSource + ?Sized,
    {
        let reference = source.acquire(path).map_err(|e| {
            tracing::warn!(error = %e, path = %path.display(), "image acquisition failed");
            EditorError::AttachImage(e)
        })?;

        self.preview.set_field(ProductField::ImageRef, reference);
        tracing::info!(path = %path.display(), "image attached");
        Ok(())
    }

    /// Persist the current draft.
    ///
    /// The draft stays in the editor either way; on success the returned record
    /// is also remembered as the last saved product.
    pub fn save(&mut self) -> Result<&StoredProduct, EditorError> {
        let stored = self
            .store
            .create(self.preview.product().clone())
            .map_err(|e| {
                tracing::warn!(error = %e, "save failed; draft kept for retry");
                EditorError::Save(e)
            })?;

        tracing::info!(product_id = %stored.id, name = stored.product.name(), "product saved");
        let saved: &StoredProduct = self.saved.insert(stored);
        Ok(saved)
    }

    /// Replace the draft with a stored product.
    pub fn load(&mut self, id: ProductId) -> Result<(), EditorError> {
        let stored = self
            .store
            .get(id)
            .and_then(|found| found.ok_or_else(|| BoundaryError::not_found(format!("product {id}"))))
            .map_err(|source| {
                tracing::warn!(error = %source, product_id = %id, "load failed");
                EditorError::Load { id, source }
            })?;

        self.preview.reset(stored.product.clone());
        self.saved = Some(stored);
        tracing::info!(product_id = %id, "product loaded");
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<StoredProduct>, EditorError> {
        self.store.list().map_err(EditorError::List)
    }

    /// The current preview as pretty-printed JSON.
    pub fn view_json(&self) -> Result<String, EditorError> {
        serde_json::to_string_pretty(self.view()).map_err(EditorError::SerializePreview)
    }

    pub fn view(&self) -> &ViewModel {
        self.preview.current_view_model()
    }

    pub fn product(&self) -> &ProductDraft {
        self.preview.product()
    }

    pub fn preview(&self) -> &PreviewSynchronizer {
        &self.preview
    }

    /// Last product saved or loaded in this session.
    pub fn saved(&self) -> Option<&StoredProduct> {
        self.saved.as_ref()
    }

    /// `true` when the draft differs from the last saved/loaded product, or
    /// nothing has been saved yet.
    pub fn has_unsaved_changes(&self) -> bool {
        self.saved
            .as_ref()
            .is_none_or(|stored| &stored.product != self.preview.product())
    }

    pub fn subscribe(&self) -> Subscription<PreviewUpdated> {
        self.preview.subscribe()
    }
}
