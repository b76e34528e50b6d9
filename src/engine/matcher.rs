//! First-match-wins rule matching.
//!
//! This module is the operational core of the engine. A run is a single linear
//! scan over the compiled table:
//!
//! ```text
//! (0) clean            -> one cleaned string, reused for every rule
//! (1) trigger scan     -> buckets of the cleaned input
//! (2) for rule in table order:
//!       buckets missing  -> skip
//!       literal          -> exact equality
//!       template         -> regex captures
//!       first success    -> invoke handler, stop
//! (3) nothing matched  -> ""
//! ```
//!
//! There is no state carried between runs and no backtracking across rules:
//! table order is the only tie-break, so more specific rules must come before
//! the general ones they overlap with.

use std::time::Instant;

use log::{debug, trace, warn};

use super::cleaner::clean;
use super::compiled_rules::CompiledRules;
use super::fragments::FragmentTable;
use super::metrics::{MatchedRule, RunMetrics, RunResult};
use super::trigger::TriggerInfo;
use crate::api::{NormalizeResultVerbose, Options, verbose_from_run};
use crate::error::EngineResult;
use crate::{Rule, TokenClass};

/// An immutable, compiled normalization table.
///
/// Build once with [`Engine::new`], then share freely: runs only read it.
///
/// # Example
/// ```
/// use lotsize::{Engine, TokenClass, rule};
///
/// let classes = [TokenClass { name: "num", alternatives: &["[0-9]+"] }];
/// let engine = Engine::new(&classes, vec![
///     rule! { name: "n/a", literal: "N/A", then: "Unknown" },
///     rule! {
///         name: "square feet",
///         pattern: r"^(?<area>{num}) sqft$",
///         prod: |caps| lotsize::acres_from_square_feet(caps.name("area").unwrap_or_default()),
///     },
/// ])
/// .unwrap();
///
/// assert_eq!(engine.normalize("N/A"), "Unknown");
/// assert_eq!(engine.normalize("43560 sqft"), "1.000 acres");
/// assert_eq!(engine.normalize("garbage"), "");
/// ```
#[derive(Debug)]
pub struct Engine {
    compiled: CompiledRules,
}

impl Engine {
    /// Resolve `classes`, then compile `rules` against them, keeping order.
    ///
    /// Any authoring defect (unknown or duplicate class, bad regex) fails the
    /// whole build.
    pub fn new(classes: &[TokenClass], rules: Vec<Rule>) -> EngineResult<Self> {
        let fragments = FragmentTable::build(classes)?;
        let compiled = CompiledRules::new(rules, &fragments)?;
        debug!("[engine] compiled {} rules from {} token classes", compiled.len(), classes.len());
        Ok(Engine { compiled })
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Rule names in table order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.compiled.names()
    }

    /// Normalize `raw` with default [`Options`].
    pub fn normalize(&self, raw: &str) -> String {
        self.run(raw, &Options::default()).value
    }

    pub fn normalize_with(&self, raw: &str, options: &Options) -> String {
        self.run(raw, options).value
    }

    /// Normalize `raw` and report which rule fired and what the run cost.
    pub fn normalize_verbose_with(&self, raw: &str, options: &Options) -> NormalizeResultVerbose {
        verbose_from_run(raw, self.run(raw, options))
    }

    pub(crate) fn run(&self, raw: &str, options: &Options) -> RunResult {
        let started = Instant::now();
        let cleaned = clean(raw);
        let trigger = TriggerInfo::scan(&cleaned);
        let mut metrics = RunMetrics::default();

        debug!("[trigger_scan] cleaned={:?} buckets={:?}", cleaned, trigger.buckets);

        let mut hit = None;
        for (index, (compiled, meta)) in self.compiled.rules.iter().zip(&self.compiled.metas).enumerate() {
            if options.bucket_gating && !trigger.satisfies(meta.buckets) {
                metrics.skipped += 1;
                continue;
            }

            metrics.evaluated += 1;
            let Some(captures) = compiled.captures(&cleaned) else {
                trace!("[rule:miss] index={} name=\"{}\"", index, compiled.rule.name);
                continue;
            };

            let value = compiled.rule.handler.invoke(&captures);
            if options.report_nan && value.contains("NaN") {
                warn!(
                    "NaN lot size: raw={:?} cleaned={:?} groups={:?} rule=\"{}\" pattern={}",
                    raw,
                    cleaned,
                    captures,
                    compiled.rule.name,
                    compiled.pattern()
                );
            }

            debug!("[rule:hit] index={} name=\"{}\" value={:?}", index, compiled.rule.name, value);
            hit = Some((MatchedRule { index, name: compiled.rule.name }, value));
            break;
        }

        let (matched, value) = match hit {
            Some((matched, value)) => (Some(matched), value),
            None => {
                debug!("[rule:none] cleaned={:?}", cleaned);
                (None, String::new())
            }
        };

        metrics.total = started.elapsed();
        RunResult { value, cleaned, matched, metrics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::{BucketMask, estimate_lot_size};

    const CLASSES: &[TokenClass] = &[
        TokenClass { name: "sep", alternatives: &[r"\s*x\s*", r"\s*by\s*"] },
        TokenClass { name: "num", alternatives: &[r"[0-9][0-9, ]*(?:\.[0-9 ]*)? *(?:'|ft)?"] },
    ];

    fn dimensions_rule() -> Rule {
        rule! {
            name: "dimensions with smallest bucket",
            pattern: r"^({num}){sep}({num})\s*\|0-4,050 sqft$",
            buckets: BucketMask::HAS_DIGITS | BucketMask::HAS_PIPE,
            prod: |caps| estimate_lot_size([caps.get(1), caps.get(2), None, None], "< 0.093 acres"),
        }
    }

    fn bucket_rule() -> Rule {
        rule! {
            name: "smallest bucket",
            pattern: r"^.*\|0-4,050 sqft$",
            buckets: BucketMask::HAS_PIPE,
            then: "< 0.093 acres",
        }
    }

    #[test]
    fn first_match_wins() {
        let specific_first = Engine::new(CLASSES, vec![dimensions_rule(), bucket_rule()]).unwrap();
        let general_first = Engine::new(CLASSES, vec![bucket_rule(), dimensions_rule()]).unwrap();

        assert_eq!(specific_first.normalize("50x100|0-4,050 sqft"), "0.115 acres");
        assert_eq!(general_first.normalize("50x100|0-4,050 sqft"), "< 0.093 acres");

        // Outside the overlap both orders agree.
        assert_eq!(specific_first.normalize("TBD|0-4,050 sqft"), "< 0.093 acres");
        assert_eq!(general_first.normalize("TBD|0-4,050 sqft"), "< 0.093 acres");
    }

    #[test]
    fn literal_rules_are_exact_and_case_sensitive() {
        let engine = Engine::new(CLASSES, vec![rule! { name: "tbd", literal: "TBD|0-4,050 sqft", then: "< 0.093 acres" }])
            .unwrap();

        assert_eq!(engine.normalize("TBD|0-4,050 sqft"), "< 0.093 acres");
        assert_eq!(engine.normalize("  TBD|0-4,050 sqft\t"), "< 0.093 acres");
        assert_eq!(engine.normalize("tbd|0-4,050 sqft"), "");
        assert_eq!(engine.normalize("TBD|0-4,050 sqft (approx area)"), "");
    }

    #[test]
    fn template_case_sensitivity_is_per_rule() {
        let engine = Engine::new(
            CLASSES,
            vec![
                rule! { name: "unknown", pattern: r"N/A|Unknown", case_sensitive: true, then: "Unknown" },
                rule! { name: "acre", pattern: r"^1 acre$", then: "1 acres" },
            ],
        )
        .unwrap();

        assert_eq!(engine.normalize("N/A"), "Unknown");
        assert_eq!(engine.normalize("n/a"), "");
        assert_eq!(engine.normalize("1 ACRE"), "1 acres");
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let engine = Engine::new(CLASSES, vec![bucket_rule()]).unwrap();
        let run = engine.run("garbage", &Options::default());

        assert_eq!(run.value, "");
        assert_eq!(run.matched, None);
    }

    #[test]
    fn run_reports_hit_and_counts() {
        let engine = Engine::new(CLASSES, vec![dimensions_rule(), bucket_rule()]).unwrap();

        let run = engine.run("TBD|0-4,050 sqft", &Options::default());
        assert_eq!(run.matched, Some(MatchedRule { index: 1, name: "smallest bucket" }));
        assert_eq!(run.metrics.evaluated, 2);
        assert_eq!(run.metrics.skipped, 0);

        let run = engine.run("garbage", &Options::default());
        assert_eq!(run.metrics.evaluated, 0);
        assert_eq!(run.metrics.skipped, 2);

        let ungated = Options { bucket_gating: false, ..Options::default() };
        let run = engine.run("garbage", &ungated);
        assert_eq!(run.metrics.evaluated, 2);
        assert_eq!(run.metrics.skipped, 0);
    }

    #[test]
    fn unknown_class_prevents_construction() {
        let rules = vec![rule! { name: "acres", pattern: r"^({num})\s*{acres}$", then: "x" }];
        let err = Engine::new(CLASSES, rules).unwrap_err();
        assert!(matches!(&err, EngineError::UnknownTokenClass { rule: "acres", class } if class == "acres"));
    }

    #[test]
    fn invalid_regex_prevents_construction() {
        let rules = vec![rule! { name: "broken", pattern: r"^({num}$", then: "x" }];
        let err = Engine::new(CLASSES, rules).unwrap_err();
        assert!(matches!(err, EngineError::RegexCompile { rule: "broken", .. }));
        assert!(err.to_string().starts_with("rule `broken` failed to compile"));
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();

        let engine = Engine::new(CLASSES, vec![dimensions_rule(), bucket_rule()]).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.normalize("50 x 100|0-4,050 sqft")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), "0.115 acres");
            }
        });
    }
}
