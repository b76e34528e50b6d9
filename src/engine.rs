//! Lot-size normalization engine.
//!
//! The engine turns one raw lot-size field into one normalized string. It is
//! split into focused submodules under `src/engine/`, wired together here.
//!
//! ## How the parts work together
//!
//! ```text
//! token classes ──┐
//!                 │  FragmentTable::build       (fragments.rs)
//! rules (all) ────┼─ CompiledRules::new         (compiled_rules.rs)
//!                 │    - expand `{class}` placeholders
//!                 │    - compile one regex per template rule
//!                 v
//!              Engine (immutable, shareable)
//!                 │
//! raw input ── clean ─── TriggerInfo::scan ──┐  (cleaner.rs, trigger.rs)
//!                                            v
//!                               Engine::run  (matcher.rs)
//!                                 - scan rules in table order
//!                                 - skip rules whose buckets are absent
//!                                 - first match wins, invoke its handler
//!                                            │
//!                                            v
//!                                  RunResult (metrics.rs)
//! ```
//!
//! Nothing in a built [`Engine`] is mutated by a run: all per-call state
//! (cleaned input, captures, dimension candidates) lives on the caller's stack,
//! so one engine can be shared across threads without locking.
//!
//! ## Responsibilities by module
//!
//! - `cleaner.rs`: fixed, ordered removal of noise substrings.
//! - `fragments.rs`: resolves token classes and expands rule templates.
//! - `compiled_rules.rs`: compiles rules and derives per-rule metadata.
//! - `trigger.rs`: scans the cleaned input for coarse buckets.
//! - `matcher.rs`: the first-match-wins scan and the NaN diagnostic.
//! - `metrics.rs`: what a run observed (rule hit, counts, timing).
//!
//! ## Debugging
//!
//! Runs log through the `log` facade: `debug` for the trigger scan and the
//! winning rule, `trace` for every rule evaluated, `warn` for NaN output.

#[path = "engine/cleaner.rs"]
mod cleaner;
#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/fragments.rs"]
mod fragments;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/trigger.rs"]
mod trigger;

pub use cleaner::clean;
#[allow(unused_imports)]
pub use compiled_rules::{BucketMask, CompiledRules, RuleMeta};
#[allow(unused_imports)]
pub use fragments::FragmentTable;
pub use matcher::Engine;
#[allow(unused_imports)]
pub use metrics::{MatchedRule, RunMetrics, RunResult};
#[allow(unused_imports)]
pub use trigger::TriggerInfo;
