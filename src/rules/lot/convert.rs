//! Unit converters.
//!
//! Each converter reads its input through [`ToMagnitude`], converts to acres
//! and formats with three decimals: `"<n.nnn> acres"`. The factors are the
//! ones historical output was produced with and must not be refined.

use super::helpers::{ToMagnitude, format_number, to_fixed3};

pub const ACRES_PER_HECTARE: f64 = 2.471054;
pub const SQUARE_METERS_PER_ACRE: f64 = 4046.856;
pub const SQUARE_FEET_PER_ACRE: f64 = 43560.0;

/// Hectares to `"<n.nnn> acres"`.
pub fn acres_from_hectares<M: ToMagnitude>(hectares: M) -> String {
    acres(hectares.to_magnitude() * ACRES_PER_HECTARE)
}

/// Square meters to `"<n.nnn> acres"`.
pub fn acres_from_square_meters<M: ToMagnitude>(square_meters: M) -> String {
    acres(square_meters.to_magnitude() / SQUARE_METERS_PER_ACRE)
}

/// Square feet to `"<n.nnn> acres"`.
pub fn acres_from_square_feet<M: ToMagnitude>(square_feet: M) -> String {
    acres(square_feet.to_magnitude() / SQUARE_FEET_PER_ACRE)
}

fn acres(value: f64) -> String {
    format!("{} acres", to_fixed3(value))
}

/// An acreage already stated in acres, echoed in shortest form (`"0.20"` ->
/// `"0.2 acres"`).
pub(crate) fn echo_acres<M: ToMagnitude>(acres: M) -> String {
    format!("{} acres", format_number(acres.to_magnitude()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_one_unit_exactly() {
        assert_eq!(acres_from_hectares(1.0), "2.471 acres");
        assert_eq!(acres_from_square_meters(4046.856), "1.000 acres");
        assert_eq!(acres_from_square_feet(43560.0), "1.000 acres");
    }

    #[test]
    fn converts_text_input() {
        assert_eq!(acres_from_hectares("1.80 "), "4.448 acres");
        assert_eq!(acres_from_hectares("0.575"), "1.421 acres");
        assert_eq!(acres_from_square_meters("1021 "), "0.252 acres");
        assert_eq!(acres_from_square_feet("10,147 "), "0.233 acres");
        assert_eq!(acres_from_square_feet(String::from("5,000")), "0.115 acres");
    }

    #[test]
    fn nan_is_formatted_not_raised() {
        assert_eq!(acres_from_hectares("0.5.5"), "NaN acres");
        assert_eq!(acres_from_square_feet(f64::NAN), "NaN acres");
    }

    #[test]
    fn echoes_stated_acres() {
        assert_eq!(echo_acres("0.20 "), "0.2 acres");
        assert_eq!(echo_acres("2.22 "), "2.22 acres");
        assert_eq!(echo_acres("1 "), "1 acres");
        assert_eq!(echo_acres("1,000"), "1000 acres");
    }

    #[test]
    fn exact_ties_round_half_to_even() {
        // 2722.5 / 43560 is exactly 0.0625.
        assert_eq!(acres_from_square_feet("2722.5"), "0.062 acres");
        // 0.1875 is exact too; here the even neighbour is the upper one.
        assert_eq!(acres_from_square_feet(0.1875 * SQUARE_FEET_PER_ACRE), "0.188 acres");
    }

    #[test]
    fn echo_never_uses_exponent_notation() {
        assert_eq!(echo_acres("0.0000001"), "0.0000001 acres");
        assert_eq!(echo_acres("1e3"), "1000 acres");
    }
}
