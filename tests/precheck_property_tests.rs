//! Property-Based Precheck Tests
//!
//! - Only the exact string "group" is rejected
//! - Snippet formatting is deterministic and embeds inputs verbatim
//! - An empty registry never rejects

use proptest::prelude::*;
use twin_precheck::{Context, PrecheckRegistry, format_bad_good, precheck};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Invariant: anything other than exactly "group" passes
    #[test]
    fn invariant_only_exact_group_is_rejected(raw in any::<String>()) {
        let result = precheck(&Context::new(raw.clone()));
        prop_assert_eq!(result.is_err(), raw == "group");
    }

    /// Invariant: strings built around "group" still pass
    #[test]
    fn invariant_group_with_affixes_passes(
        prefix in "[a-z -]{0,8}",
        suffix in "[a-z -]{0,8}",
    ) {
        prop_assume!(!(prefix.is_empty() && suffix.is_empty()));
        let raw = format!("{prefix}group{suffix}");
        prop_assert!(precheck(&Context::new(raw)).is_ok());
    }

    /// Invariant: formatting is deterministic and keeps both snippets
    #[test]
    fn invariant_format_is_deterministic(bad in any::<String>(), good in any::<String>()) {
        let first = format_bad_good(&bad, &good);
        let second = format_bad_good(&bad, &good);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.contains(&bad));
        prop_assert!(first.contains(&good));
    }

    /// Invariant: an empty registry accepts every context
    #[test]
    fn invariant_empty_registry_never_rejects(raw in any::<String>()) {
        prop_assert!(PrecheckRegistry::empty().run(&Context::new(raw)).is_ok());
    }
}
