//! Product state → preview synchronization.

use chrono::Utc;

use tagforge_core::DomainResult;
use tagforge_events::{Event, EventBus, InMemoryEventBus, Subscription};
use tagforge_products::{FieldValue, ProductDraft, ProductField};

use crate::event::{ChangeCause, PreviewUpdated};
use crate::view_model::{PreviewOptions, ViewModel};

/// Owner of the product being edited and of its derived view model.
///
/// Every mutation runs to completion, full view model rebuild and update
/// notification included, before returning to the caller. The view model is
/// therefore always `ViewModel::derive(product, options)`.
#[derive(Debug)]
pub struct PreviewSynchronizer {
    product: ProductDraft,
    view: ViewModel,
    options: PreviewOptions,
    revision: u64,
    updates: InMemoryEventBus<PreviewUpdated>,
}

impl PreviewSynchronizer {
    pub fn new(initial: ProductDraft) -> Self {
        Self::with_options(initial, PreviewOptions::default())
    }

    pub fn with_options(initial: ProductDraft, options: PreviewOptions) -> Self {
        let view = ViewModel::derive(&initial, &options);
        Self {
            product: initial,
            view,
            options,
            revision: 0,
            updates: InMemoryEventBus::new(),
        }
    }

    /// Replace one product attribute and rebuild the preview.
    ///
    /// Never fails: an unparseable price is stored as zero.
    pub fn set_field(&mut self, field: ProductField, value: impl Into<FieldValue>) {
        self.product.apply(field, value.into());
        self.recompute(ChangeCause::FieldEdited { field });
    }

    /// Like [`set_field`](Self::set_field), for callers holding a field name.
    ///
    /// An unknown name is rejected before any state is touched.
    pub fn set_field_named(&mut self, name: &str, value: impl Into<FieldValue>) -> DomainResult<()> {
        let field: ProductField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Replace the whole product (e.g. "New Tag" or loading a saved product).
    pub fn reset(&mut self, initial: ProductDraft) {
        self.product = initial;
        self.recompute(ChangeCause::Reset);
    }

    /// Install an identifier obtained from an external generator.
    pub fn regenerate_identifier(&mut self, new_identifier: impl Into<String>) {
        self.product
            .apply(ProductField::Identifier, FieldValue::Text(new_identifier.into()));
        self.recompute(ChangeCause::IdentifierRegenerated);
    }

    pub fn current_view_model(&self) -> &ViewModel {
        &self.view
    }

    pub fn product(&self) -> &ProductDraft {
        &self.product
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    /// Number of recomputes performed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Receive a [`PreviewUpdated`] after every future recompute.
    pub fn subscribe(&self) -> Subscription<PreviewUpdated> {
        self.updates.subscribe()
    }

    fn recompute(&mut self, cause: ChangeCause) {
        self.view = ViewModel::derive(&self.product, &self.options);
        self.revision += 1;

        let update = PreviewUpdated {
            revision: self.revision,
            cause,
            view: self.view.clone(),
            occurred_at: Utc::now(),
        };

        tracing::debug!(
            event = update.event_type(),
            version = update.version(),
            at = %update.occurred_at(),
            revision = self.revision,
            ?cause,
            bars = self.view.pattern().len(),
            price = self.view.display_price(),
            "preview recomputed"
        );

        // Subscribers can always re-read the view; a lost notification is not fatal.
        if let Err(e) = self.updates.publish(update) {
            tracing::warn!(error = ?e, revision = self.revision, "failed to publish preview update");
        }
    }
}
