//! Batch checking over many invocations.
//!
//! Each invocation is checked independently and fails fast on its own; a
//! violation in one invocation never stops the others from being checked.

use crate::context::{Context, InvocationKind, SourceLocation};
use crate::error::PrecheckViolation;
use crate::logging::precheck_span;
use crate::metrics::{PRECHECK_METRICS, PrecheckMetrics};
use crate::prechecks::PrecheckRegistry;
use serde::Serialize;

/// Outcome of checking a single invocation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationOutcome {
    pub class_name_raw: String,
    pub kind: InvocationKind,
    pub location: Option<SourceLocation>,
    pub violation: Option<PrecheckViolation>,
}

impl InvocationOutcome {
    pub fn is_pass(&self) -> bool {
        self.violation.is_none()
    }
}

/// Outcomes for a batch of invocations, in input order
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub checked: usize,
    pub failed: usize,
    pub outcomes: Vec<InvocationOutcome>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &InvocationOutcome> {
        self.outcomes.iter().filter(|o| !o.is_pass())
    }

    /// Compiler-style text: one block per violation, then a summary line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for outcome in self.failures() {
            let Some(violation) = &outcome.violation else {
                continue;
            };
            out.push_str(&format!(
                "error[{}]: {}\n",
                violation.precheck,
                display_location(outcome.location.as_ref())
            ));
            out.push_str(&violation.message);
            if !violation.message.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "{} invocation(s) checked, {} failed\n",
            self.checked, self.failed
        ));
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `file:line:column`, or `<unknown>` when the host supplied no location.
pub fn display_location(location: Option<&SourceLocation>) -> String {
    location
        .map(ToString::to_string)
        .unwrap_or_else(|| "<unknown>".to_string())
}

/// Check every context against `registry`, recording into the global metrics.
pub fn check_all(registry: &PrecheckRegistry, contexts: &[Context]) -> BatchReport {
    check_all_with_metrics(registry, contexts, &PRECHECK_METRICS)
}

pub fn check_all_with_metrics(
    registry: &PrecheckRegistry,
    contexts: &[Context],
    metrics: &PrecheckMetrics,
) -> BatchReport {
    let span = precheck_span(contexts.len());
    let _enter = span.enter();

    let outcomes: Vec<InvocationOutcome> = contexts
        .iter()
        .map(|ctx| {
            metrics.record_invocation();
            let violation = registry.run(ctx).err();
            if let Some(v) = &violation {
                metrics.record_violation(&v.precheck);
                tracing::warn!(
                    precheck = %v.precheck,
                    class_name_raw = %ctx.class_name_raw,
                    kind = %ctx.kind,
                    location = %display_location(ctx.location.as_ref()),
                    "precheck violation"
                );
            }
            InvocationOutcome {
                class_name_raw: ctx.class_name_raw.clone(),
                kind: ctx.kind,
                location: ctx.location.clone(),
                violation,
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_pass()).count();
    tracing::info!(checked = outcomes.len(), failed, "precheck batch complete");

    BatchReport {
        checked: outcomes.len(),
        failed,
        outcomes,
    }
}
