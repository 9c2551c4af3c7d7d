use serde::{Deserialize, Serialize};

use tagforge_core::ValueObject;

/// Horizontal weight of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarWidth {
    Hairline,
    Narrow,
    Wide,
}

/// Vertical extent of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarHeight {
    Short,
    Tall,
}

/// One bar of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarDescriptor {
    pub width: BarWidth,
    pub height: BarHeight,
}

impl ValueObject for BarDescriptor {}

impl BarDescriptor {
    /// Bar for a digit value.
    ///
    /// Width cycles through `Hairline`, `Narrow`, `Wide` on `value % 3`; height is
    /// `Tall` for odd values.
    pub fn for_digit(value: u32) -> Self {
        let width = match value % 3 {
            0 => BarWidth::Hairline,
            1 => BarWidth::Narrow,
            _ => BarWidth::Wide,
        };
        let height = if value % 2 == 0 {
            BarHeight::Short
        } else {
            BarHeight::Tall
        };

        Self { width, height }
    }
}

/// Ordered bars, one per character of the encoded identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<BarDescriptor>);

impl ValueObject for Pattern {}

impl Pattern {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bars(&self) -> &[BarDescriptor] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, BarDescriptor> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&BarDescriptor> {
        self.0.get(index)
    }
}

impl FromIterator<BarDescriptor> for Pattern {
    fn from_iter<I: IntoIterator<Item = BarDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl core::ops::Index<usize> for Pattern {
    type Output = BarDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a BarDescriptor;
    type IntoIter = core::slice::Iter<'a, BarDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
