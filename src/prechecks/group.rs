//! Rejects the bare `group` class.
//!
//! `group` pairs with `group-hover:` variants only when it is a literal
//! `className` on the parent element. Emitted through the macro it becomes
//! generated styling and the pairing silently breaks.

use crate::context::Context;
use crate::diagnostic::format_violation;
use crate::error::{PrecheckResult, PrecheckViolation};
use crate::prechecks::Precheck;

/// Fails when the raw class string is exactly `group`.
pub struct GroupClassPrecheck;

impl GroupClassPrecheck {
    pub const NAME: &'static str = "group-class";
}

impl Precheck for GroupClassPrecheck {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Requires \"group\" to be a literal className instead of a macro class"
    }

    fn check(&self, ctx: &Context) -> PrecheckResult {
        if ctx.class_name_raw != "group" {
            return Ok(());
        }

        Err(PrecheckViolation::new(
            self.name(),
            format_violation(
                "\"group\" must be added as className:",
                "tw`group`",
                "<div className=\"group\">",
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_precheck_rejects_bare_group() {
        let err = GroupClassPrecheck
            .check(&Context::new("group"))
            .unwrap_err();
        assert_eq!(err.precheck, "group-class");
        assert!(err.message.starts_with("\"group\" must be added as className:\n\n"));
        assert!(err.message.contains("tw`group`"));
        assert!(err.message.contains("<div className=\"group\">"));
        assert!(err.message.ends_with('\n'));
    }

    #[test]
    fn test_group_precheck_is_exact_match_only() {
        for raw in ["group-hover", "group foo", "flex group", " group", "Group", ""] {
            assert!(
                GroupClassPrecheck.check(&Context::new(raw)).is_ok(),
                "{raw:?} should pass"
            );
        }
    }
}
