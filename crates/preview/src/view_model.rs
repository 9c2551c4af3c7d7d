use serde::{Deserialize, Serialize};

use tagforge_barcode::{Pattern, encode};
use tagforge_core::ValueObject;
use tagforge_products::ProductDraft;

pub const DEFAULT_PLACEHOLDER_NAME: &str = "Product Name";

/// Display settings that do not belong to the product itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewOptions {
    /// Shown instead of the name while the name is empty.
    pub placeholder_name: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
        }
    }
}

/// Display-ready snapshot of a product.
///
/// Only [`ViewModel::derive`] builds one; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    display_name: String,
    display_price: String,
    pattern: Pattern,
    caption: String,
}

impl ValueObject for ViewModel {}

impl ViewModel {
    pub fn derive(product: &ProductDraft, options: &PreviewOptions) -> Self {
        let display_name = if product.name().is_empty() {
            options.placeholder_name.clone()
        } else {
            product.name().to_string()
        };

        Self {
            display_name,
            display_price: product.price().display(),
            pattern: encode(product.identifier()),
            caption: product.identifier().to_string(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn display_price(&self) -> &str {
        &self.display_price
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The identifier printed under the bars.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// `false` when there is no identifier and renderers should show a placeholder.
    pub fn has_code(&self) -> bool {
        !self.pattern.is_empty()
    }
}
