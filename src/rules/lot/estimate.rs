//! Area estimation from boundary measurements.
//!
//! Listings often give a lot as its side lengths instead of its area:
//! `"50 x 100"` or `"22 x 77 x 20.5 x 77.8"`.
//!
//! ```text
//! two sides    a <= b              area = a * b
//! four sides   a <= b <= c <= d    a/b > 0.85 and c/d > 0.85
//!                                    -> area = avg(a, b) * avg(c, d)
//!                                  otherwise -> caller's default label
//! ```
//!
//! With four sides the two shortest are taken as one pair of opposite sides
//! and the two longest as the other. The estimate is only trusted when both
//! pairs are nearly equal, i.e. the lot is close to a rectangle.

use super::convert::acres_from_square_feet;
use super::helpers::ToMagnitude;

/// Both side pairs must be more similar than this (strictly).
pub const RECTANGULARITY_THRESHOLD: f64 = 0.85;

/// Estimate a lot size in acres from up to four sides in feet.
///
/// Absent candidates are ignored. Returns `default` verbatim when four sides
/// are too irregular for a rectangular estimate.
///
/// # Example
/// ```
/// use lotsize::estimate_lot_size;
///
/// assert_eq!(estimate_lot_size([Some("50"), Some("100"), None, None], ""), "0.115 acres");
/// assert_eq!(estimate_lot_size([Some("23"), Some("222"), Some("106"), Some("150")], "< 0.5 acres"), "< 0.5 acres");
/// ```
pub fn estimate_lot_size(candidates: [Option<&str>; 4], default: &str) -> String {
    estimate_lot_size_with(candidates, default, acres_from_square_feet::<f64>)
}

/// Like [`estimate_lot_size`], with the area conversion supplied by the caller.
pub fn estimate_lot_size_with<M: ToMagnitude>(
    candidates: [Option<M>; 4],
    default: &str,
    convert: fn(f64) -> String,
) -> String {
    let mut sides: Vec<f64> = candidates.into_iter().flatten().map(|c| c.to_magnitude()).collect();
    sides.sort_by(f64::total_cmp);

    // A missing side reads as NaN so it poisons the arithmetic instead of
    // counting as zero.
    let side = |i: usize| sides.get(i).copied().unwrap_or(f64::NAN);

    if sides.len() <= 2 {
        return convert(side(0) * side(1));
    }

    let (a, b, c, d) = (side(0), side(1), side(2), side(3));
    if a / b > RECTANGULARITY_THRESHOLD && c / d > RECTANGULARITY_THRESHOLD {
        return convert(((a + b) / 2.0) * ((c + d) / 2.0));
    }

    default.to_string()
}
