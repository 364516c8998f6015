//! Property-based tests for group token parsing.
//!
//! These tests use proptest to generate random tokens and verify that the
//! grammar's invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::group::FragmentGroup;
    use crate::locator::with_default_extension;
    use proptest::prelude::*;

    // ============================================================================
    // FragmentGroup::parse property tests
    // ============================================================================

    proptest! {
        /// Property: a token without ':' is the same as one prefixed with the default
        #[test]
        fn implicit_directory_matches_explicit(names in prop::collection::vec("[a-z0-9_-]{1,12}", 1..6)) {
            let token = names.join(",");
            let implicit = FragmentGroup::parse(&token, "copilot").unwrap();
            let explicit = FragmentGroup::parse(&format!("copilot:{}", token), "copilot").unwrap();
            prop_assert_eq!(implicit, explicit);
        }

        /// Property: names come back in the order they were listed
        #[test]
        fn names_preserve_order(
            directory in "[a-z]{1,8}",
            names in prop::collection::vec("[a-z0-9_-][a-z0-9_.-]{0,11}", 1..8),
        ) {
            let token = format!("{}:{}", directory, names.join(","));
            let group = FragmentGroup::parse(&token, "copilot").unwrap();
            prop_assert_eq!(group.directory(), directory.as_str());
            prop_assert_eq!(group.names(), names.as_slice());
        }

        /// Property: surrounding whitespace never survives parsing
        #[test]
        fn names_are_trimmed(
            names in prop::collection::vec("[a-z]{1,8}", 1..5),
            pad in "[ \t]{0,3}",
        ) {
            let token = names
                .iter()
                .map(|n| format!("{pad}{n}{pad}"))
                .collect::<Vec<_>>()
                .join(",");
            let group = FragmentGroup::parse(&token, "copilot").unwrap();
            prop_assert_eq!(group.names(), names.as_slice());
        }

        /// Property: parsing either succeeds with non-empty names or fails, never panics
        #[test]
        fn parse_never_yields_empty_names(token in ".*") {
            if let Ok(group) = FragmentGroup::parse(&token, "copilot") {
                prop_assert!(!group.names().is_empty());
                prop_assert!(!group.directory().is_empty());
                for name in group.names() {
                    prop_assert!(!name.is_empty());
                    prop_assert_eq!(name.trim(), name.as_str());
                }
            }
        }

        /// Property: a token made only of separators and whitespace is malformed
        #[test]
        fn separators_only_is_malformed(token in "[a-z]{0,4}:[ ,]*") {
            let result = FragmentGroup::parse(&token, "copilot");
            prop_assert!(result.is_err(), "{:?} should be malformed", token);
        }
    }

    // ============================================================================
    // with_default_extension property tests
    // ============================================================================

    proptest! {
        /// Property: names without a dot always gain exactly ".md"
        #[test]
        fn bare_names_gain_md(name in "[a-zA-Z0-9_-]{1,16}") {
            prop_assert_eq!(with_default_extension(&name), format!("{}.md", name));
        }

        /// Property: names with an extension are never changed
        #[test]
        fn extended_names_unchanged(stem in "[a-z]{1,8}", ext in "[a-z]{1,4}") {
            let name = format!("{}.{}", stem, ext);
            prop_assert_eq!(with_default_extension(&name), name);
        }

        /// Property: applying the default extension twice is the same as once
        #[test]
        fn default_extension_is_idempotent(name in "[a-zA-Z0-9_.-]{1,16}") {
            let once = with_default_extension(&name);
            prop_assert_eq!(with_default_extension(&once), once.clone());
        }
    }
}
