//! Precheck Pipeline Integration Tests
//!
//! End-to-end behavior of the runner and registry through the public API:
//! fail-fast ordering, empty registries, the `group` precheck and
//! thread-sharing of the default registry.

use assert_matches::assert_matches;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use twin_precheck::prechecks::{self, GroupClassPrecheck, Precheck};
use twin_precheck::{
    Context, InvocationKind, PrecheckRegistry, PrecheckViolation, SourceLocation,
    format_bad_good, precheck, precheck_fn,
};

// =============================================================================
// Helpers
// =============================================================================

fn recording(name: &'static str, log: Arc<Mutex<Vec<&'static str>>>, fail: bool) -> impl Precheck {
    precheck_fn(name, "records its invocation", move |_ctx| {
        log.lock().push(name);
        if fail {
            Err(PrecheckViolation::new(name, format!("{name} rejected the invocation")))
        } else {
            Ok(())
        }
    })
}

// =============================================================================
// Runner contract
// =============================================================================

#[test]
fn test_empty_registry_accepts_any_context() {
    let registry = PrecheckRegistry::empty();
    for raw in ["group", "", "text-purple-500"] {
        assert!(registry.run(&Context::new(raw)).is_ok());
    }
    assert!(prechecks::run(&[], &Context::new("group")).is_ok());
}

#[test]
fn test_first_violation_stops_remaining_prechecks() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let registry = PrecheckRegistry::empty()
        .with(recording("passes", log.clone(), false))
        .with(recording("fails", log.clone(), true))
        .with(recording("never-runs", log.clone(), false));

    let err = registry.run(&Context::new("flex")).unwrap_err();

    assert_eq!(err.precheck, "fails");
    assert_eq!(*log.lock(), vec!["passes", "fails"]);
}

#[test]
fn test_order_decides_which_violation_is_reported() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let registry = PrecheckRegistry::empty()
        .with(recording("custom", log.clone(), true))
        .with(GroupClassPrecheck);

    let err = registry.run(&Context::new("group")).unwrap_err();
    assert_eq!(err.precheck, "custom");

    let registry = PrecheckRegistry::default_suite().with(recording("custom", log, true));
    let err = registry.run(&Context::new("group")).unwrap_err();
    assert_eq!(err.precheck, "group-class");
}

#[test]
fn test_violation_reaches_caller_unchanged() {
    let original = PrecheckViolation::new("custom", "exact message\n");
    let expected = original.clone();
    let registry = PrecheckRegistry::empty().with(precheck_fn("custom", "", move |_| {
        Err(original.clone())
    }));

    assert_eq!(registry.run(&Context::new("x")), Err(expected));
}

#[test]
fn test_prechecks_see_extended_context_fields() {
    let registry = PrecheckRegistry::empty().with(precheck_fn(
        "no-props",
        "rejects tw props",
        |ctx| match ctx.kind {
            InvocationKind::Property => Err(PrecheckViolation::new("no-props", "no tw props")),
            _ => Ok(()),
        },
    ));

    assert!(registry.run(&Context::new("flex")).is_ok());
    assert_matches!(
        registry.run(&Context::new("flex").with_kind(InvocationKind::Property)),
        Err(PrecheckViolation { precheck: ref name, .. }) if name == "no-props"
    );
}

// =============================================================================
// Group precheck, end to end
// =============================================================================

#[test]
fn test_bare_group_is_rejected_with_both_snippets() {
    let registry = PrecheckRegistry::new(vec![Box::new(GroupClassPrecheck)]);
    let ctx = Context::new("group").with_location(SourceLocation::new("src/Card.jsx", 3, 10));

    let err = registry.run(&ctx).unwrap_err();

    assert!(err.message.contains("tw`group`"));
    assert!(err.message.contains("<div className=\"group\">"));
    assert!(
        err.message
            .contains(&format_bad_good("tw`group`", "<div className=\"group\">"))
    );
}

#[test]
fn test_other_class_names_pass() {
    let registry = PrecheckRegistry::new(vec![Box::new(GroupClassPrecheck)]);
    for raw in ["text-purple-500", "group-hover", "", "flex group", "group "] {
        assert!(registry.run(&Context::new(raw)).is_ok(), "{raw:?}");
    }
}

#[test]
fn test_group_rejected_for_every_invocation_kind() {
    for kind in [
        InvocationKind::Property,
        InvocationKind::TaggedTemplate,
        InvocationKind::StyledElement,
        InvocationKind::Interpolation,
    ] {
        assert_matches!(precheck(&Context::new("group").with_kind(kind)), Err(_));
    }
}

#[test]
fn test_default_registry_is_shareable_across_threads() {
    let registry = Arc::new(PrecheckRegistry::default_suite());
    let handles: Vec<_> = ["group", "flex", "group", "block"]
        .into_iter()
        .map(|raw| {
            let registry = registry.clone();
            thread::spawn(move || registry.run(&Context::new(raw)).is_err())
        })
        .collect();

    let failures: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(failures, vec![true, false, true, false]);
}
