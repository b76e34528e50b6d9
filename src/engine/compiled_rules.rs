//! Rule compilation and metadata.
//!
//! This module holds the *static* side of the engine: everything derived from
//! the rule table once, when an [`Engine`](super::Engine) is built.
//!
//! Building is split in two phases:
//!
//! 1. **Resolve token classes** (`fragments.rs`): one fragment per class.
//! 2. **Compile rules** (this module): expand each template against the
//!    fragment table and compile it, honoring the rule's case sensitivity.
//!    Literal rules are kept as plain strings.
//!
//! ## Buckets
//!
//! A rule may declare coarse features (`BucketMask`) that its input must have
//! for the rule to be able to match at all, e.g. "contains a digit". The
//! matcher skips a rule when the cleaned input lacks one of them. Declared
//! buckets must be *sound*: a rule may only require a bucket that every input
//! it matches has. Skipping a rule that could not match never changes the
//! first-match-wins result.
//!
//! ## Invariants
//!
//! - `CompiledRules::rules` and `CompiledRules::metas` are aligned by index and
//!   keep the order of the input table.
//! - Compiled rules are never mutated after `CompiledRules::new` returns.

use regex::{Regex, RegexBuilder};

use super::fragments::FragmentTable;
use crate::error::{EngineError, EngineResult};
use crate::{Captures, Matcher, Rule};

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        /// At least one ASCII digit.
        const HAS_DIGITS = 1 << 0;
        /// A `|` separating the listing text from the source's bucket label.
        const HAS_PIPE   = 1 << 1;
    }
}

/// Metadata attached to a compiled rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub buckets: BucketMask,
}

/// A rule with its matcher compiled.
#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub rule: Rule,
    pub matcher: CompiledMatcher,
}

#[derive(Debug)]
pub(crate) enum CompiledMatcher {
    Literal(&'static str),
    Regex(Regex),
}

impl CompiledRule {
    /// Match the cleaned input, returning the captures on success.
    pub fn captures<'t>(&self, input: &'t str) -> Option<Captures<'t>> {
        match &self.matcher {
            CompiledMatcher::Literal(literal) => (input == *literal).then(Captures::default),
            CompiledMatcher::Regex(regex) => regex.captures(input).map(Captures::from_regex),
        }
    }

    /// The literal or the expanded regex source, for diagnostics.
    pub fn pattern(&self) -> &str {
        match &self.matcher {
            CompiledMatcher::Literal(literal) => *literal,
            CompiledMatcher::Regex(regex) => regex.as_str(),
        }
    }
}

/// Pre-compiled rule set with metadata.
#[derive(Debug)]
pub struct CompiledRules {
    pub(crate) rules: Vec<CompiledRule>,
    pub metas: Vec<RuleMeta>,
}

impl CompiledRules {
    /// Compile `rules` against `fragments`, keeping table order.
    ///
    /// Fails on the first rule whose template references an unknown class or
    /// does not compile.
    pub fn new(rules: Vec<Rule>, fragments: &FragmentTable) -> EngineResult<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut metas = Vec::with_capacity(rules.len());

        for rule in rules {
            let matcher = match rule.matcher {
                Matcher::Literal(literal) => CompiledMatcher::Literal(literal),
                Matcher::Template { source, case_insensitive } => {
                    let expanded = fragments.expand(rule.name, source)?;
                    let regex = RegexBuilder::new(&expanded)
                        .case_insensitive(case_insensitive)
                        .build()
                        .map_err(|source| EngineError::RegexCompile { rule: rule.name, source })?;
                    CompiledMatcher::Regex(regex)
                }
            };

            metas.push(RuleMeta { buckets: rule.buckets });
            compiled.push(CompiledRule { rule, matcher });
        }

        Ok(CompiledRules { rules: compiled, metas })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in table order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.name).collect()
    }
}
