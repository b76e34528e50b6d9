//! Input cleaning.
//!
//! Raw lot sizes carry noise that no rule wants to see: doubled quote marks,
//! tabs, `XX` or `*` used as the dimension separator, and a family of
//! "approximately" spellings. [`clean`] strips them with a fixed, ordered list
//! of literal replacements and trims the result.
//!
//! Replacements are literal and case-sensitive. Case folding for matching is
//! done by the rule regexes themselves, so the cleaned text keeps its original
//! casing.

/// `(needle, replacement)` pairs, applied in order.
///
/// Order matters: `approximate` must go before `approx`, and `(approx)`
/// before `approx` so the parentheses go with it.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\"\"", ""),
    ("\t", " "),
    ("XX", "x"),
    ("*", "x"),
    ("FEET ", ""),
    ("APPROXIMATELY", ""),
    ("Approximately", ""),
    ("approximate", ""),
    ("(approx)", ""),
    ("(APPROX.)", ""),
    ("approx.", ""),
    ("approx", ""),
    ("Approx.", ""),
    ("Approx", ""),
    ("APPROX", ""),
];

/// Clean a raw lot-size value before rule matching.
pub fn clean(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for (needle, replacement) in REPLACEMENTS {
        if cleaned.contains(needle) {
            cleaned = cleaned.replace(needle, replacement);
        }
    }
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_noise_substrings() {
        let cases = [
            ("50 XX 100", "50 x 100"),
            ("50*100", "50x100"),
            ("50\tx\t100", "50 x 100"),
            ("\"\"50 x 100\"\"", "50 x 100"),
            ("1.80 ha APPROX", "1.80 ha"),
            ("1.80 ha (APPROX.)", "1.80 ha"),
            ("Approximately 2 acres", "2 acres"),
            ("APPROXIMATELY 2 acres", "2 acres"),
            ("2 acres approximate", "2 acres"),
            ("2 acres (approx)|1 - 3 acres", "2 acres |1 - 3 acres"),
            ("Approx. 50x100", "50x100"),
            ("FEET 50x100", "50x100"),
            ("  0.20 acres  ", "0.20 acres"),
        ];

        for (raw, expected) in cases {
            assert_eq!(clean(raw), expected, "cleaning {raw:?}");
        }
    }

    #[test]
    fn clean_input_is_unchanged() {
        let cases = ["50 x 100", "10,147 sqft", "1.80 ha", "garbage|.5 - 9.99 acres", "N/A", ""];

        for input in cases {
            assert_eq!(clean(input), input);
            assert_eq!(clean(&clean(input)), clean(input));
        }
    }

    #[test]
    fn replacements_are_case_sensitive() {
        // Only the listed spellings are removed; casing of the rest is kept.
        assert_eq!(clean("ApPrOx 50 X 100"), "ApPrOx 50 X 100");
        assert_eq!(clean("feet 50x100"), "feet 50x100");
    }

    #[test]
    fn lowercase_approximately_leaves_suffix() {
        assert_eq!(clean("approximately 2 acres"), "ly 2 acres");
    }
}
