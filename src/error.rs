//! Error types for the precheck pipeline
//!
//! A precheck failure is always fatal to the invocation being transformed,
//! so there is a single violation kind with no codes or severities.

use serde::Serialize;
use thiserror::Error;

/// Raised by a precheck when an invocation must not be transformed.
///
/// `Display` yields the formatted message verbatim; hosts add location
/// context around it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct PrecheckViolation {
    /// Name of the precheck that raised the violation
    pub precheck: String,
    /// Formatted diagnostic message
    pub message: String,
}

impl PrecheckViolation {
    pub fn new(precheck: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            precheck: precheck.into(),
            message: message.into(),
        }
    }
}

/// Result of running one precheck, or a whole registry, against a context.
pub type PrecheckResult = Result<(), PrecheckViolation>;

/// A configured precheck name that no registered precheck answers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown precheck '{name}' (available: {})", .available.join(", "))]
pub struct UnknownPrecheck {
    pub name: String,
    pub available: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_displays_message_verbatim() {
        let violation = PrecheckViolation::new("group-class", "line one\n\nline two\n");
        assert_eq!(violation.to_string(), "line one\n\nline two\n");
        assert_eq!(violation.precheck, "group-class");
    }

    #[test]
    fn test_unknown_precheck_lists_available() {
        let err = UnknownPrecheck {
            name: "nope".to_string(),
            available: vec!["group-class".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown precheck 'nope' (available: group-class)"
        );
    }
}
