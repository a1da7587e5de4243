//! Property-based tests for the version set merge logic.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::record::{VersionEntry, VersionSet};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn entry(name: &str, author: &str) -> VersionEntry {
        VersionEntry::new(
            name,
            "",
            Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
            author,
        )
    }

    proptest! {
        /// Property: any sequence of adds yields at most one entry per
        /// distinct name.
        #[test]
        fn add_sequence_keeps_names_unique(names in prop::collection::vec("[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", 0..32)) {
            let mut set = VersionSet::default();
            for name in &names {
                set.add(entry(name, ""));
            }
            let mut seen: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), set.len());
        }

        /// Property: iterating a set after any sequence of adds yields names
        /// in strictly ascending lexicographic order.
        #[test]
        fn add_sequence_keeps_strict_name_order(names in prop::collection::vec("[a-z0-9.]{1,8}", 0..32)) {
            let mut set = VersionSet::default();
            for name in &names {
                set.add(entry(name, ""));
            }
            let collected: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
            for pair in collected.windows(2) {
                prop_assert!(pair[0] < pair[1], "'{}' should sort before '{}'", pair[0], pair[1]);
            }
        }

        /// Property: membership reflects the most recently added value for
        /// any name.
        #[test]
        fn add_last_write_wins(name in "[a-z0-9.]{1,8}", authors in prop::collection::vec("[a-z]{1,6}", 1..8)) {
            let mut set = VersionSet::default();
            for author in &authors {
                set.add(entry(&name, author));
            }
            prop_assert_eq!(set.len(), 1);
            prop_assert_eq!(&set.get(&name).unwrap().author, authors.last().unwrap());
        }

        /// Property: adding is idempotent once a value is present.
        #[test]
        fn add_is_idempotent(names in prop::collection::vec("[a-z0-9.]{1,8}", 0..16)) {
            let mut set = VersionSet::default();
            for name in &names {
                set.add(entry(name, ""));
            }
            let before = set.clone();
            for name in &names {
                set.add(entry(name, ""));
            }
            prop_assert_eq!(set, before);
        }
    }
}
