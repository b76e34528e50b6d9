//! Engine run metrics.
//!
//! A run always reports which rule (if any) produced the value and how much of
//! the table it had to walk. This is what the verbose API and the CLI report
//! print; the plain `normalize` path simply drops it.

use std::time::Duration;

/// The rule that produced a run's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRule {
    /// Position of the rule in the table.
    pub index: usize,
    pub name: &'static str,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run, cleaning included.
    pub total: Duration,
    /// Rules whose matcher was evaluated.
    pub evaluated: usize,
    /// Rules skipped because the input lacked one of their buckets.
    pub skipped: usize,
}

/// Engine output bundled with what the run observed.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Normalized value; empty when no rule matched.
    pub value: String,
    /// The input after cleaning, as seen by the rules.
    pub cleaned: String,
    pub matched: Option<MatchedRule>,
    pub metrics: RunMetrics,
}
