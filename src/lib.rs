extern crate self as lotsize;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

use std::fmt;

pub use api::{
    NormalizeDetails, NormalizeResultVerbose, Options, normalize, normalize_batch, normalize_verbose,
    normalize_verbose_with, normalize_with,
};
pub use engine::{BucketMask, Engine, clean};
pub use error::{EngineError, EngineResult};
pub use rules::lot::convert::{acres_from_hectares, acres_from_square_feet, acres_from_square_meters};
pub use rules::lot::estimate::{estimate_lot_size, estimate_lot_size_with};
pub use rules::lot::helpers::{ToMagnitude, parse_size};

// --- Rule table types -------------------------------------------------------

/// A named alternation of raw regex sources, spliced into rule templates as
/// `{name}`.
///
/// Each alternative is wrapped in a non-capturing group and the whole class is
/// wrapped again, so a class behaves as a single atom wherever it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClass {
    pub name: &'static str,
    pub alternatives: &'static [&'static str],
}

/// How a rule decides whether it applies to the cleaned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Exact, case-sensitive equality with the cleaned input.
    Literal(&'static str),

    /// A regex template that may reference token classes by `{name}`. The
    /// template is expanded and compiled once, when the [`Engine`] is built.
    Template { source: &'static str, case_insensitive: bool },
}

pub type Production = Box<dyn Fn(&Captures<'_>) -> String + Send + Sync>;

/// What a rule produces once its matcher succeeds.
pub enum Handler {
    /// A fixed output string.
    Constant(&'static str),
    /// A function of the captured groups.
    Computed(Production),
}

impl Handler {
    pub(crate) fn invoke(&self, captures: &Captures<'_>) -> String {
        match self {
            Handler::Constant(value) => (*value).to_string(),
            Handler::Computed(production) => production(captures),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Handler::Computed(_) => f.write_str("Computed(<function>)"),
        }
    }
}

/// One entry of the ordered normalization table: a name (for diagnostics), a
/// matcher and a handler.
///
/// The position of a rule inside the table is part of its meaning: the first
/// rule that matches wins. `buckets` lists coarse features the cleaned input
/// must have for the rule to be able to match at all (see [`BucketMask`]).
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub handler: Handler,
    pub buckets: BucketMask,
}

/// Capture groups handed to a [`Handler::Computed`] production.
///
/// Literal rules produce an empty set of captures.
#[derive(Default)]
pub struct Captures<'t> {
    inner: Option<regex::Captures<'t>>,
}

impl<'t> Captures<'t> {
    pub(crate) fn from_regex(captures: regex::Captures<'t>) -> Self {
        Captures { inner: Some(captures) }
    }

    /// Text of the group at `index` (0 is the whole match).
    pub fn get(&self, index: usize) -> Option<&'t str> {
        self.inner.as_ref()?.get(index).map(|m| m.as_str())
    }

    /// Text of the named group `name`.
    pub fn name(&self, name: &str) -> Option<&'t str> {
        self.inner.as_ref()?.name(name).map(|m| m.as_str())
    }

    /// All groups in order, `None` for groups that did not participate.
    pub fn groups(&self) -> Vec<Option<&'t str>> {
        match &self.inner {
            Some(caps) => caps.iter().map(|m| m.map(|m| m.as_str())).collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.groups()).finish()
    }
}
