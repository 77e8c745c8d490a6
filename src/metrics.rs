//! Counters for precheck activity across a build.
//!
//! Recorded by the batch checker; the runner itself stays stateless.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Invocation and violation counters
pub struct PrecheckMetrics {
    invocations: AtomicU64,
    violations: RwLock<HashMap<String, AtomicU64>>,
}

impl PrecheckMetrics {
    pub fn new() -> Self {
        Self {
            invocations: AtomicU64::new(0),
            violations: RwLock::new(HashMap::new()),
        }
    }

    /// Record one invocation passed through the registry
    pub fn record_invocation(&self) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a violation raised by `precheck`
    pub fn record_violation(&self, precheck: &str) {
        {
            let counts = self.violations.read();
            if let Some(counter) = counts.get(precheck) {
                counter.fetch_add(1, Ordering::Relaxed);
                return;
            }
        }
        self.violations
            .write()
            .entry(precheck.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn invocation_count(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }

    pub fn violation_count(&self, precheck: &str) -> u64 {
        self.violations
            .read()
            .get(precheck)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Snapshot of all counters
    pub fn get_stats(&self) -> PrecheckStats {
        let violations = self
            .violations
            .read()
            .iter()
            .map(|(name, counter)| (name.clone(), counter.load(Ordering::Relaxed)))
            .collect();

        PrecheckStats {
            invocations: self.invocation_count(),
            violations,
        }
    }

    pub fn reset(&self) {
        self.invocations.store(0, Ordering::Relaxed);
        self.violations.write().clear();
    }
}

impl Default for PrecheckMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrecheckStats {
    pub invocations: u64,
    pub violations: HashMap<String, u64>,
}

/// Global precheck metrics instance
pub static PRECHECK_METRICS: Lazy<PrecheckMetrics> = Lazy::new(PrecheckMetrics::new);
