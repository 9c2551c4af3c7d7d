//! Editor configuration from the environment.

use serde::Serialize;

use tagforge_infra::identifier::DEFAULT_IDENTIFIER_LENGTH;
use tagforge_preview::PreviewOptions;
use tagforge_preview::view_model::DEFAULT_PLACEHOLDER_NAME;
use tagforge_products::ProductDraft;

pub const PLACEHOLDER_NAME_VAR: &str = "TAGFORGE_PLACEHOLDER_NAME";
pub const CURRENCY_SYMBOL_VAR: &str = "TAGFORGE_CURRENCY_SYMBOL";
pub const IDENTIFIER_LENGTH_VAR: &str = "TAGFORGE_IDENTIFIER_LENGTH";
pub const START_BLANK_VAR: &str = "TAGFORGE_START_BLANK";

pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Settings for a tag designer session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorConfig {
    pub placeholder_name: String,
    pub currency_symbol: String,
    /// Digits in a generated identifier (1..=64).
    pub identifier_length: usize,
    /// Start from an empty tag instead of the demo product.
    pub start_blank: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            currency_symbol: "$".to_string(),
            identifier_length: DEFAULT_IDENTIFIER_LENGTH,
            start_blank: false,
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing or malformed values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = non_blank(lookup(PLACEHOLDER_NAME_VAR)) {
            config.placeholder_name = name;
        }

        if let Some(symbol) = lookup(CURRENCY_SYMBOL_VAR) {
            config.currency_symbol = symbol.trim().to_string();
        }

        if let Some(raw) = non_blank(lookup(IDENTIFIER_LENGTH_VAR)) {
            match raw.parse::<usize>() {
                Ok(len) if (1..=MAX_IDENTIFIER_LENGTH).contains(&len) => {
                    config.identifier_length = len;
                }
                _ => tracing::warn!(
                    value = %raw,
                    default = config.identifier_length,
                    "{IDENTIFIER_LENGTH_VAR} must be between 1 and {MAX_IDENTIFIER_LENGTH}; using default"
                ),
            }
        }

        if let Some(raw) = non_blank(lookup(START_BLANK_VAR)) {
            config.start_blank = matches!(
                raw.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        config
    }

    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            placeholder_name: self.placeholder_name.clone(),
        }
    }

    /// Product shown when a session starts.
    pub fn initial_product(&self) -> ProductDraft {
        if self.start_blank {
            ProductDraft::empty()
        } else {
            demo_product()
        }
    }
}

/// Sample tag shown on startup.
pub fn demo_product() -> ProductDraft {
    ProductDraft::new(
        "Premium Smartphone Pro",
        899.99,
        "1234567890123456789012345678",
        "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=1067",
    )
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
