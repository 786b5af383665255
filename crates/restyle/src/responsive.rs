//! Responsive value expansion.
//!
//! A raw prop value is normalized into ordered `(bucket, value)` pairs
//! before scale resolution. Sequences map positionally (index 0 is the
//! base, index i targets breakpoint i−1); mappings key by `"_"` for the
//! base and by alias or literal index for breakpoints; anything else is a
//! single base value.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::media::MediaQueries;

/// The slot a resolved style entry is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// The unconditional top-level style object.
    Base,
    /// The media block for breakpoint `index` (0-based, table order).
    Breakpoint(usize),
}

/// Expands a raw value into `(bucket, value)` pairs.
///
/// - Null entries produce no pair for their bucket; no value is carried
///   forward between buckets.
/// - Sequence indices beyond the breakpoint table are silently dropped.
/// - Mapping keys resolve as a breakpoint alias first, then as a literal
///   decimal index; unmatched keys are dropped. Pairs are emitted base
///   first, then in ascending table order regardless of key insertion
///   order. When two keys name the same breakpoint, the later key wins.
pub fn expand(raw: &Value, media: &MediaQueries) -> Vec<(Bucket, Value)> {
    match raw {
        Value::Array(items) => {
            let mut pairs = Vec::new();
            for (position, item) in items.iter().enumerate() {
                if item.is_null() {
                    continue;
                }
                if position == 0 {
                    pairs.push((Bucket::Base, item.clone()));
                    continue;
                }
                let index = position - 1;
                if index < media.count() {
                    pairs.push((Bucket::Breakpoint(index), item.clone()));
                }
            }
            pairs
        }
        Value::Object(map) => {
            let mut base = None;
            let mut slots: BTreeMap<usize, Value> = BTreeMap::new();
            for (key, value) in map {
                if value.is_null() {
                    continue;
                }
                if key == "_" {
                    base = Some(value.clone());
                    continue;
                }
                let index = media
                    .alias_index(key)
                    .or_else(|| key.parse::<usize>().ok());
                if let Some(index) = index {
                    if index < media.count() {
                        slots.insert(index, value.clone());
                    }
                }
            }
            let mut pairs = Vec::new();
            if let Some(value) = base {
                pairs.push((Bucket::Base, value));
            }
            pairs.extend(
                slots
                    .into_iter()
                    .map(|(index, value)| (Bucket::Breakpoint(index), value)),
            );
            pairs
        }
        Value::Null => Vec::new(),
        scalar => vec![(Bucket::Base, scalar.clone())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Breakpoints, Theme};
    use serde_json::json;

    fn default_media() -> MediaQueries {
        // Freshly derived tables avoid touching the process cache here.
        let theme = Theme::new().disable_cache(true);
        (*MediaQueries::for_theme(&theme)).clone()
    }

    fn aliased_media() -> MediaQueries {
        let theme = Theme::new()
            .with_breakpoints(
                Breakpoints::new(["480px", "768px", "1024px"])
                    .alias("sm", "480px")
                    .alias("md", "768px")
                    .alias("lg", "1024px"),
            )
            .disable_cache(true);
        (*MediaQueries::for_theme(&theme)).clone()
    }

    #[test]
    fn scalar_maps_to_base() {
        let pairs = expand(&json!("tomato"), &default_media());
        assert_eq!(pairs, vec![(Bucket::Base, json!("tomato"))]);
    }

    #[test]
    fn sequence_maps_positionally() {
        let pairs = expand(&json!([1, 2, 3]), &default_media());
        assert_eq!(
            pairs,
            vec![
                (Bucket::Base, json!(1)),
                (Bucket::Breakpoint(0), json!(2)),
                (Bucket::Breakpoint(1), json!(3)),
            ]
        );
    }

    #[test]
    fn null_sequence_entries_are_skipped() {
        let pairs = expand(&json!(["a", null, "b"]), &default_media());
        assert_eq!(
            pairs,
            vec![
                (Bucket::Base, json!("a")),
                (Bucket::Breakpoint(1), json!("b")),
            ]
        );
    }

    #[test]
    fn sequence_entries_beyond_table_are_dropped() {
        // Default table has three breakpoints; indices 3+ have no slot.
        let pairs = expand(&json!([0, 1, 2, 3, 4, 5]), &default_media());
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs.last(), Some(&(Bucket::Breakpoint(2), json!(3))));
    }

    #[test]
    fn mapping_with_underscore_and_aliases() {
        let pairs = expand(&json!({ "_": 1, "sm": 2, "lg": 4 }), &aliased_media());
        assert_eq!(
            pairs,
            vec![
                (Bucket::Base, json!(1)),
                (Bucket::Breakpoint(0), json!(2)),
                (Bucket::Breakpoint(2), json!(4)),
            ]
        );
    }

    #[test]
    fn mapping_emission_ignores_key_insertion_order() {
        let scrambled = expand(&json!({ "lg": 4, "_": 1, "sm": 2 }), &aliased_media());
        let ordered = expand(&json!({ "_": 1, "sm": 2, "lg": 4 }), &aliased_media());
        assert_eq!(scrambled, ordered);
    }

    #[test]
    fn mapping_accepts_literal_indices() {
        let pairs = expand(&json!({ "0": "a", "2": "b" }), &aliased_media());
        assert_eq!(
            pairs,
            vec![
                (Bucket::Breakpoint(0), json!("a")),
                (Bucket::Breakpoint(2), json!("b")),
            ]
        );
    }

    #[test]
    fn unmatched_mapping_keys_are_dropped() {
        let pairs = expand(&json!({ "huge": 9, "7": 9 }), &aliased_media());
        assert!(pairs.is_empty());
    }

    #[test]
    fn null_mapping_values_are_skipped() {
        let pairs = expand(&json!({ "_": null, "sm": 2 }), &aliased_media());
        assert_eq!(pairs, vec![(Bucket::Breakpoint(0), json!(2))]);
    }

    #[test]
    fn later_key_wins_for_same_breakpoint() {
        // "sm" and "0" both target breakpoint 0.
        let pairs = expand(&json!({ "sm": "first", "0": "second" }), &aliased_media());
        assert_eq!(pairs, vec![(Bucket::Breakpoint(0), json!("second"))]);
    }

    #[test]
    fn null_raw_expands_to_nothing() {
        assert!(expand(&json!(null), &default_media()).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::theme::{Breakpoints, Theme};
    use proptest::prelude::*;
    use serde_json::json;

    fn media_with(count: usize) -> MediaQueries {
        let widths: Vec<String> = (1..=count).map(|i| format!("{}0em", i)).collect();
        let theme = Theme::new()
            .with_breakpoints(Breakpoints::new(widths))
            .disable_cache(true);
        (*MediaQueries::for_theme(&theme)).clone()
    }

    proptest! {
        #[test]
        fn buckets_are_ordered_and_in_range(
            entries in proptest::collection::vec(
                prop_oneof![Just(Value::Null), any::<u8>().prop_map(|n| json!(n))],
                0..10,
            ),
            breakpoint_count in 1usize..6,
        ) {
            let media = media_with(breakpoint_count);
            let pairs = expand(&Value::Array(entries), &media);

            let mut last_index: Option<usize> = None;
            for (position, (bucket, value)) in pairs.iter().enumerate() {
                prop_assert!(!value.is_null());
                match bucket {
                    Bucket::Base => prop_assert_eq!(position, 0),
                    Bucket::Breakpoint(index) => {
                        prop_assert!(*index < media.count());
                        if let Some(last) = last_index {
                            prop_assert!(*index > last);
                        }
                        last_index = Some(*index);
                    }
                }
            }
        }

        #[test]
        fn mapping_output_matches_equivalent_sequence(
            base in any::<u8>(),
            first in any::<u8>(),
            third in any::<u8>(),
        ) {
            let media = media_with(3);
            let from_map = expand(
                &json!({ "_": base, "0": first, "2": third }),
                &media,
            );
            let from_seq = expand(
                &json!([base, first, null, third]),
                &media,
            );
            prop_assert_eq!(from_map, from_seq);
        }
    }
}
