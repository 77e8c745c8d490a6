//! Bad/good snippet formatting for precheck diagnostics.
//!
//! Output is a plain string with no location or severity attached; callers
//! compose any extra structure around it.

/// Label in front of the discouraged snippet.
pub const BAD_LABEL: &str = "✕ Bad:";

/// Label in front of the recommended snippet.
pub const GOOD_LABEL: &str = "✓ Good:";

/// Format a discouraged/recommended snippet pair.
///
/// Both snippets are embedded verbatim, separated by a blank line:
///
/// ```text
/// ✕ Bad: tw`group`
///
/// ✓ Good: <div className="group">
/// ```
pub fn format_bad_good(bad: &str, good: &str) -> String {
    format!("{BAD_LABEL} {bad}\n\n{GOOD_LABEL} {good}")
}

/// Full violation message: description line, blank line, then the snippet pair.
pub fn format_violation(description: &str, bad: &str, good: &str) -> String {
    format!("{description}\n\n{}\n", format_bad_good(bad, good))
}
