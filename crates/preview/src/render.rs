//! Plain-text rendering of a tag preview.

use tagforge_barcode::{BarDescriptor, BarHeight, BarWidth, Pattern};

use crate::view_model::ViewModel;

pub const NO_CODE_PLACEHOLDER: &str = "No barcode";

/// Renders a [`ViewModel`] as lines of text for terminals and logs.
///
/// Layout: name, price, two rows of bars, caption. Tall bars fill both rows,
/// short bars only the bottom one. An empty pattern is replaced by
/// [`NO_CODE_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTagRenderer {
    currency_symbol: String,
}

impl Default for TextTagRenderer {
    fn default() -> Self {
        Self::new("$")
    }
}

impl TextTagRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn render(&self, view: &ViewModel) -> String {
        self.render_lines(view).join("\n")
    }

    pub fn render_lines(&self, view: &ViewModel) -> Vec<String> {
        let mut lines = vec![
            view.display_name().to_string(),
            format!("{}{}", self.currency_symbol, view.display_price()),
        ];

        match bar_rows(view.pattern()) {
            Some([top, bottom]) => {
                lines.push(top);
                lines.push(bottom);
                lines.push(view.caption().to_string());
            }
            None => lines.push(NO_CODE_PLACEHOLDER.to_string()),
        }

        lines
    }
}

fn glyph(width: BarWidth) -> &'static str {
    match width {
        BarWidth::Hairline => "│",
        BarWidth::Narrow => "█",
        BarWidth::Wide => "██",
    }
}

fn bar_rows(pattern: &Pattern) -> Option<[String; 2]> {
    if pattern.is_empty() {
        return None;
    }

    let mut top = Vec::with_capacity(pattern.len());
    let mut bottom = Vec::with_capacity(pattern.len());

    for BarDescriptor { width, height } in pattern {
        let glyph = glyph(*width);
        bottom.push(glyph.to_string());
        top.push(match height {
            BarHeight::Tall => glyph.to_string(),
            BarHeight::Short => " ".repeat(glyph.chars().count()),
        });
    }

    Some([
        top.join(" ").trim_end().to_string(),
        bottom.join(" "),
    ])
}
