pub mod config;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod prechecks;
pub mod report;

pub use config::{CliArgs, PrecheckConfig, ReportFormat};
pub use context::{Context, InvocationKind, SourceLocation};
pub use diagnostic::{format_bad_good, format_violation};
pub use error::{PrecheckResult, PrecheckViolation, UnknownPrecheck};
pub use logging::{LoggingConfig, init_logging};
pub use metrics::PRECHECK_METRICS;
pub use prechecks::{DEFAULT_PRECHECKS, Precheck, PrecheckRegistry, precheck_fn};
pub use report::{BatchReport, check_all};

use anyhow::Result;
use std::io::Write;

/// Run the built-in prechecks against one invocation.
pub fn precheck(ctx: &Context) -> PrecheckResult {
    DEFAULT_PRECHECKS.run(ctx)
}

/// Check every configured invocation and write the report to `out`.
///
/// Returns whether every invocation passed.
pub fn run_cli(config: &PrecheckConfig, out: &mut impl Write) -> Result<bool> {
    let registry = config.registry()?;

    if config.list_prechecks {
        for precheck in registry.prechecks() {
            writeln!(out, "{}\t{}", precheck.name(), precheck.description())?;
        }
        return Ok(true);
    }

    let contexts = config.load_contexts()?;
    tracing::info!(
        invocations = contexts.len(),
        prechecks = ?registry.names(),
        "running prechecks"
    );

    let report = check_all(&registry, &contexts);
    let stats = PRECHECK_METRICS.get_stats();
    tracing::info!(
        invocations = stats.invocations,
        violations = ?stats.violations,
        "precheck metrics"
    );
    match config.report {
        ReportFormat::Text => write!(out, "{}", report.render_text())?,
        ReportFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }

    Ok(report.is_clean())
}
