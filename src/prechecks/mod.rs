//! Precheck pipeline - validation run before an invocation is transformed
//!
//! Each precheck is an independent predicate over a [`Context`]. The runner
//! evaluates them in registration order and stops at the first violation:
//! - order only decides which violation is reported when several would fire
//! - the violation reaches the caller unchanged
//! - the runner keeps no state between invocations
//!
//! ## Usage
//! ```rust
//! use twin_precheck::context::Context;
//! use twin_precheck::prechecks::PrecheckRegistry;
//!
//! let registry = PrecheckRegistry::default_suite();
//! assert!(registry.run(&Context::new("text-purple-500")).is_ok());
//! assert!(registry.run(&Context::new("group")).is_err());
//! ```

pub mod group;

use crate::context::Context;
use crate::error::{PrecheckResult, UnknownPrecheck};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;

pub use group::GroupClassPrecheck;

// =============================================================================
// Core Precheck Trait
// =============================================================================

/// One validation rule over an invocation context
pub trait Precheck: Send + Sync {
    /// Stable identifier, used for configuration and reporting
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Return `Err` to abort the transform of this invocation
    fn check(&self, ctx: &Context) -> PrecheckResult;
}

/// Precheck backed by a closure, see [`precheck_fn`].
pub struct FnPrecheck<F> {
    name: String,
    description: String,
    check: F,
}

impl<F> Precheck for FnPrecheck<F>
where
    F: Fn(&Context) -> PrecheckResult + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, ctx: &Context) -> PrecheckResult {
        (self.check)(ctx)
    }
}

/// Wrap a closure as a named precheck.
pub fn precheck_fn<F>(
    name: impl Into<String>,
    description: impl Into<String>,
    check: F,
) -> FnPrecheck<F>
where
    F: Fn(&Context) -> PrecheckResult + Send + Sync,
{
    FnPrecheck {
        name: name.into(),
        description: description.into(),
        check,
    }
}

// =============================================================================
// Runner
// =============================================================================

/// Run `prechecks` in order against `ctx`, stopping at the first violation.
///
/// An empty slice always succeeds.
pub fn run(prechecks: &[Box<dyn Precheck>], ctx: &Context) -> PrecheckResult {
    for precheck in prechecks {
        tracing::debug!(
            precheck = precheck.name(),
            class_name_raw = %ctx.class_name_raw,
            "evaluating precheck"
        );
        precheck.check(ctx)?;
    }
    Ok(())
}

// =============================================================================
// Registry
// =============================================================================

/// Process-wide default registry, built once on first use.
pub static DEFAULT_PRECHECKS: Lazy<PrecheckRegistry> = Lazy::new(PrecheckRegistry::default_suite);

/// Ordered collection of prechecks
pub struct PrecheckRegistry {
    prechecks: Vec<Box<dyn Precheck>>,
}

impl PrecheckRegistry {
    /// Create a registry from prechecks in evaluation order
    pub fn new(prechecks: Vec<Box<dyn Precheck>>) -> Self {
        Self { prechecks }
    }

    /// Registry with no prechecks; every run succeeds
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The built-in prechecks
    pub fn default_suite() -> Self {
        Self::new(vec![Box::new(GroupClassPrecheck)])
    }

    /// Append a precheck after the existing ones
    pub fn with(mut self, precheck: impl Precheck + 'static) -> Self {
        self.prechecks.push(Box::new(precheck));
        self
    }

    /// Keep only the prechecks named in `enabled`, preserving order.
    ///
    /// Every name must match a registered precheck.
    pub fn only(mut self, enabled: &HashSet<String>) -> Result<Self, UnknownPrecheck> {
        if let Some(unknown) = enabled
            .iter()
            .find(|name| !self.prechecks.iter().any(|p| p.name() == name.as_str()))
        {
            return Err(UnknownPrecheck {
                name: unknown.clone(),
                available: self.names().into_iter().map(str::to_string).collect(),
            });
        }
        self.prechecks.retain(|p| enabled.contains(p.name()));
        Ok(self)
    }

    /// Run every precheck in order, stopping at the first violation
    pub fn run(&self, ctx: &Context) -> PrecheckResult {
        run(&self.prechecks, ctx)
    }

    pub fn prechecks(&self) -> &[Box<dyn Precheck>] {
        &self.prechecks
    }

    pub fn names(&self) -> Vec<&str> {
        self.prechecks.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.prechecks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prechecks.is_empty()
    }
}

impl Default for PrecheckRegistry {
    fn default() -> Self {
        Self::default_suite()
    }
}

impl fmt::Debug for PrecheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrecheckRegistry")
            .field("prechecks", &self.names())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
