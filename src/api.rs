use crate::engine::{Engine, RunResult};
use crate::rules::lot;
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(|| {
    Engine::new(lot::classes::get(), lot::rules::get()).expect("built-in lot size rule table must compile")
});

/// Options that affect a normalization run.
///
/// Neither option changes the returned value.
#[derive(Debug, Clone)]
pub struct Options {
    /// Skip rules whose required buckets are absent from the cleaned input.
    pub bucket_gating: bool,
    /// Log a warning when the normalized value contains `NaN`.
    pub report_nan: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { bucket_gating: true, report_nan: true }
    }
}

/// Details of a single run, returned by [`normalize_verbose`] and
/// [`normalize_verbose_with`].
#[derive(Debug, Clone)]
pub struct NormalizeDetails {
    /// The input after cleaning, exactly as the rules saw it.
    pub cleaned: String,
    /// Position of the winning rule in the table.
    pub rule_index: Option<usize>,
    /// Name of the winning rule.
    pub rule: Option<String>,
    /// Rules whose matcher was evaluated.
    pub evaluated: usize,
    /// Rules skipped by bucket gating.
    pub skipped: usize,
    /// Total elapsed time.
    pub total: Duration,
}

/// Result from [`normalize_verbose`] and [`normalize_verbose_with`].
#[derive(Debug, Clone)]
pub struct NormalizeResultVerbose {
    /// The raw input.
    pub raw: String,
    /// Normalized value; empty when no rule matched.
    pub value: String,
    pub elapsed: Duration,
    pub details: NormalizeDetails,
}

/// Normalize a raw lot-size field using the built-in rule table.
///
/// Returns a formatted acreage (`"0.233 acres"`), a range label
/// (`"0.5 - 0.75 acres"`), `"Unknown"`, or `""` when no rule matched.
///
/// # Example
/// ```
/// use lotsize::normalize;
///
/// assert_eq!(normalize("10,147 sqft"), "0.233 acres");
/// assert_eq!(normalize("1.80 ha"), "4.448 acres");
/// assert_eq!(normalize("N/A"), "Unknown");
/// ```
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, &Options::default())
}

pub fn normalize_with(raw: &str, options: &Options) -> String {
    DEFAULT_ENGINE.normalize_with(raw, options)
}

/// Normalize many raw values; the output order matches the input order.
pub fn normalize_batch<I, S>(inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = Options::default();
    inputs.into_iter().map(|raw| DEFAULT_ENGINE.normalize_with(raw.as_ref(), &options)).collect()
}

pub fn normalize_verbose(raw: &str) -> NormalizeResultVerbose {
    normalize_verbose_with(raw, &Options::default())
}

/// Normalize `raw` and return which rule fired along with run counters.
pub fn normalize_verbose_with(raw: &str, options: &Options) -> NormalizeResultVerbose {
    DEFAULT_ENGINE.normalize_verbose_with(raw, options)
}

pub(crate) fn verbose_from_run(raw: &str, run: RunResult) -> NormalizeResultVerbose {
    let details = NormalizeDetails {
        cleaned: run.cleaned,
        rule_index: run.matched.map(|m| m.index),
        rule: run.matched.map(|m| m.name.to_string()),
        evaluated: run.metrics.evaluated,
        skipped: run.metrics.skipped,
        total: run.metrics.total,
    };

    NormalizeResultVerbose { raw: raw.to_string(), value: run.value, elapsed: run.metrics.total, details }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_verbose_reports_rule() {
        let res = normalize_verbose("  10,147 sqft ");

        assert_eq!(res.raw, "  10,147 sqft ");
        assert_eq!(res.value, "0.233 acres");
        assert_eq!(res.details.cleaned, "10,147 sqft");
        assert_eq!(res.details.rule.as_deref(), Some("square feet"));
        assert!(res.details.rule_index.is_some());
        assert!(res.details.evaluated >= 1);
        assert_eq!(res.elapsed, res.details.total);
    }

    #[test]
    fn normalize_verbose_without_match() {
        let res = normalize_verbose("garbage");

        assert_eq!(res.value, "");
        assert_eq!(res.details.rule, None);
        assert_eq!(res.details.rule_index, None);
    }

    #[test]
    fn batch_keeps_input_order() {
        let inputs = ["N/A", "10,147 sqft", "garbage", "1.80 ha"];
        assert_eq!(normalize_batch(inputs), vec!["Unknown", "0.233 acres", "", "4.448 acres"]);

        let owned: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        assert_eq!(normalize_batch(&owned), normalize_batch(inputs));
    }

    #[test]
    fn options_never_change_the_value() {
        let quiet = Options { bucket_gating: false, report_nan: false };
        for raw in ["50x100|0-4,050 sqft", ".5.5 ha", "garbage", "N/A"] {
            assert_eq!(normalize_with(raw, &quiet), normalize(raw), "options changed value for {raw:?}");
        }
    }
}
