/// A value that can be read as a lot-size magnitude.
///
/// Numbers pass through unchanged; text goes through [`parse_size`].
pub trait ToMagnitude {
    fn to_magnitude(&self) -> f64;
}

impl ToMagnitude for f64 {
    fn to_magnitude(&self) -> f64 {
        *self
    }
}

impl ToMagnitude for str {
    fn to_magnitude(&self) -> f64 {
        parse_size(self)
    }
}

impl ToMagnitude for String {
    fn to_magnitude(&self) -> f64 {
        parse_size(self)
    }
}

impl<T: ToMagnitude + ?Sized> ToMagnitude for &T {
    fn to_magnitude(&self) -> f64 {
        (**self).to_magnitude()
    }
}

/// Parse a noisy numeric token (`"10,147"`, `"50'"`, `"97 ft"`, `"1 000.5"`)
/// into `f64`.
///
/// Lower-cases, then drops spaces, thousands commas, `ft` and `'` before
/// parsing. Never fails: empty residue is `0.0`, anything else that is not a
/// decimal number is `NaN`.
pub fn parse_size(text: &str) -> f64 {
    let residue = text.to_lowercase().replace(' ', "").replace(',', "").replace("ft", "").replace('\'', "");
    parse_decimal(&residue)
}

/// Parse a decimal literal (`"12"`, `"12."`, `".5"`, `"1e3"`).
fn parse_decimal(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    // Keep `inf`/`nan` spellings out: only digits, sign, point and exponent count.
    if s.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e') {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format `value` with exactly three decimals (`"0.233"`).
pub(crate) fn to_fixed3(value: f64) -> String {
    match non_finite(value) {
        Some(text) => text.to_string(),
        // `+ 0.0` turns -0.0 into 0.0
        None => format!("{:.3}", value + 0.0),
    }
}

/// Format `value` in its shortest round-trip form (`0.2`, `2.22`, `1`).
pub(crate) fn format_number(value: f64) -> String {
    match non_finite(value) {
        Some(text) => text.to_string(),
        None => format!("{}", value + 0.0),
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_noisy_numbers() {
        let cases: Vec<(f64, &str)> = vec![
            (10147.0, "10,147"),
            (10147.0, "10,147 "),
            (50.0, "50'"),
            (97.0, "97' "),
            (97.0, "97 ft"),
            (97.0, "97FT"),
            (1000.5, "1 000.5"),
            (0.575, "0.575"),
            (20.5, "20.5"),
            (12.0, "12."),
            (0.5, ".5"),
            (1000.0, "1e3"),
        ];

        for (expected, input) in cases {
            let got = parse_size(input);
            assert!((got - expected).abs() < 1e-9, "parse_size({input:?}) = {got}, expected {expected}");
        }
    }

    #[test]
    fn empty_residue_is_zero() {
        assert_eq!(parse_size(""), 0.0);
        assert_eq!(parse_size(" , ft '"), 0.0);
    }

    #[test]
    fn malformed_numbers_are_nan() {
        for input in ["0.5.5", "12abc", "inf", "infinity", "NaN", "."] {
            assert!(parse_size(input).is_nan(), "parse_size({input:?}) should be NaN");
        }
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(4356.0_f64.to_magnitude(), 4356.0);
        assert_eq!("4,356".to_magnitude(), 4356.0);
        assert_eq!(String::from("4,356 ft").to_magnitude(), 4356.0);
    }

    #[test]
    fn fixed_three_decimals() {
        assert_eq!(to_fixed3(0.2329430670339761), "0.233");
        assert_eq!(to_fixed3(1.0), "1.000");
        assert_eq!(to_fixed3(-0.0), "0.000");
        assert_eq!(to_fixed3(f64::NAN), "NaN");
        assert_eq!(to_fixed3(f64::INFINITY), "Infinity");
    }

    #[test]
    fn shortest_number_form() {
        assert_eq!(format_number(0.2), "0.2");
        assert_eq!(format_number(2.22), "2.22");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
