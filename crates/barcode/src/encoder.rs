//! Identifier → pattern encoding.

use crate::pattern::{BarDescriptor, Pattern};

/// Numeric value used for one identifier character.
///
/// ASCII digits map to their value. Every other character is tolerated and
/// counts as `0`; identifiers are never rejected here.
pub fn digit_value(c: char) -> u32 {
    c.to_digit(10).unwrap_or(0)
}

/// Encode an identifier into its bar pattern.
///
/// One bar per `char`, in input order, so `encode(s).len() == s.chars().count()`.
/// Pure: the same input always yields the same pattern, and the empty string
/// yields the empty pattern.
pub fn encode(identifier: &str) -> Pattern {
    identifier
        .chars()
        .map(|c| BarDescriptor::for_digit(digit_value(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{BarHeight, BarWidth};

    #[test]
    fn empty_identifier_yields_empty_pattern() {
        let pattern = encode("");
        assert!(pattern.is_empty());
        assert_eq!(pattern, Pattern::empty());
    }

    #[test]
    fn non_digits_encode_like_zero() {
        assert_eq!(encode("a"), encode("0"));
        assert_eq!(encode("-"), encode("0"));
        assert_eq!(encode("é"), encode("0"));
        assert_eq!(encode("AB-12"), encode("00012"));
    }

    #[test]
    fn non_ascii_digits_are_not_digits() {
        // Arabic-Indic three.
        assert_eq!(digit_value('\u{0663}'), 0);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let identifier = "ü1ß2";
        assert_eq!(encode(identifier).len(), 4);
    }

    #[test]
    fn demo_identifier_scenario() {
        let identifier = "1234567890123456789012345678";
        let pattern = encode(identifier);

        assert_eq!(pattern.len(), identifier.chars().count());
        assert_eq!(pattern.len(), 28);

        assert_eq!(pattern[0].width, BarWidth::Narrow);
        assert_eq!(pattern[0].height, BarHeight::Tall);
        assert_eq!(pattern[1].width, BarWidth::Wide);
        assert_eq!(pattern[1].height, BarHeight::Short);
    }

    #[test]
    fn order_is_preserved() {
        let pattern = encode("90");
        assert_eq!(pattern[0], BarDescriptor::for_digit(9));
        assert_eq!(pattern[1], BarDescriptor::for_digit(0));
        assert_ne!(encode("12"), encode("21"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: one bar per character.
            #[test]
            fn length_matches_char_count(s in any::<String>()) {
                prop_assert_eq!(encode(&s).len(), s.chars().count());
            }

            /// Property: encoding is deterministic.
            #[test]
            fn encode_is_deterministic(s in any::<String>()) {
                prop_assert_eq!(encode(&s), encode(&s));
            }

            /// Property: each digit follows the modulo table.
            #[test]
            fn digit_bars_follow_modulo_table(v in 0u32..10) {
                let c = char::from_digit(v, 10).unwrap();
                let bar = encode(&c.to_string())[0];

                prop_assert_eq!(bar.width == BarWidth::Hairline, v % 3 == 0);
                prop_assert_eq!(bar.width == BarWidth::Narrow, v % 3 == 1);
                prop_assert_eq!(bar.width == BarWidth::Wide, v % 3 == 2);
                prop_assert_eq!(bar.height == BarHeight::Tall, v % 2 == 1);
            }

            /// Property: bar `i` depends only on character `i`.
            #[test]
            fn encoding_is_positional(a in "[0-9a-z]{0,16}", b in "[0-9a-z]{0,16}") {
                let joined = format!("{a}{b}");
                let expected: Vec<BarDescriptor> =
                    encode(&a).iter().chain(encode(&b).iter()).copied().collect();
                let encoded = encode(&joined);
                prop_assert_eq!(encoded.bars(), expected.as_slice());
            }
        }
    }
}
