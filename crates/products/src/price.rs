use serde::{Deserialize, Serialize};

use tagforge_core::ValueObject;

/// Product price: a finite, non-negative decimal.
///
/// Every constructor goes through [`Price::normalize`], so NaN, infinities and
/// negative amounts collapse to zero instead of surfacing as errors.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn normalize(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Self(amount)
        } else {
            Self::ZERO
        }
    }

    /// Parse user text, falling back to zero when it is not a number.
    ///
    /// Surrounding whitespace and a leading `$` are ignored.
    pub fn parse_lenient(text: &str) -> Self {
        let trimmed = text.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();

        trimmed
            .parse::<f64>()
            .map(Self::normalize)
            .unwrap_or(Self::ZERO)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Amount rounded to whole cents, halves away from zero.
    fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    /// Two-decimal display form, e.g. `"12.50"`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self::normalize(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Price::normalize(12.5).display(), "12.50");
        assert_eq!(Price::normalize(899.99).display(), "899.99");
        assert_eq!(Price::normalize(3.0).display(), "3.00");
        assert_eq!(Price::ZERO.display(), "0.00");
    }

    #[test]
    fn exact_halves_round_up() {
        assert_eq!(Price::normalize(0.125).display(), "0.13");
        assert_eq!(Price::normalize(12.125).display(), "12.13");
        assert_eq!(Price::normalize(0.375).display(), "0.38");
        // Not exact halves in binary.
        assert_eq!(Price::normalize(1.005).display(), "1.00");
        assert_eq!(Price::normalize(2.675).display(), "2.67");
        assert_eq!(Price::normalize(0.125).to_string(), "0.13");
    }

    #[test]
    fn degenerate_amounts_become_zero() {
        assert_eq!(Price::normalize(f64::NAN), Price::ZERO);
        assert_eq!(Price::normalize(f64::INFINITY), Price::ZERO);
        assert_eq!(Price::normalize(-4.0), Price::ZERO);
        assert_eq!(Price::normalize(-0.0).display(), "0.00");
    }

    #[test]
    fn parses_lenient_text() {
        assert_eq!(Price::parse_lenient("12.5").display(), "12.50");
        assert_eq!(Price::parse_lenient("  7 ").display(), "7.00");
        assert_eq!(Price::parse_lenient("$19.99").display(), "19.99");
        assert_eq!(Price::parse_lenient("not-a-number"), Price::ZERO);
        assert_eq!(Price::parse_lenient(""), Price::ZERO);
        assert_eq!(Price::parse_lenient("NaN"), Price::ZERO);
    }

    #[test]
    fn deserialization_normalizes() {
        let price: Price = serde_json::from_str("-3.5").unwrap();
        assert_eq!(price, Price::ZERO);

        let price: Price = serde_json::from_str("899.99").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "899.99");
    }
}
