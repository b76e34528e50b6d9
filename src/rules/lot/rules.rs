//! The canonical lot-size rule table.
//!
//! Order is part of the contract: the engine returns the first match, so
//! every rule here shadows the ones below it for inputs they both match.
//! Roughly, the table runs from most to least specific:
//!
//! ```text
//! exact raw values             "TBD|0-4,050 sqft"
//! N/A / Unknown                (case-sensitive, unanchored)
//! dimensions + bucket label    "50x100|0-4,050 sqft"        -> estimate, else label
//! area + unit                  "10,147 sqft", "1.80 ha"     -> converted
//! stated acreage               "0.20 acres", ".80 acre"     -> echoed
//! bare dimensions              "50 x 100"                   -> estimate, else ""
//! bucket label only            "garbage|1 - 3 acres"        -> label
//! fractional acre prefix       "1/2 acre|..."               -> decimal acres
//! ```
//!
//! Templates use the token classes from `classes.rs`: `{num}`, `{sep}`,
//! `{under_half}`, `{hectares}`, `{acres}`, `{sqft}`, `{sqm}`.

use crate::rules::lot::convert::{acres_from_hectares, acres_from_square_feet, acres_from_square_meters, echo_acres};
use crate::rules::lot::estimate::estimate_lot_size;
use crate::{BucketMask, Captures, Rule};

const DIGITS: BucketMask = BucketMask::HAS_DIGITS;
const PIPE: BucketMask = BucketMask::HAS_PIPE;
const DIGITS_PIPE: BucketMask = BucketMask::HAS_DIGITS.union(BucketMask::HAS_PIPE);

/// Estimate from the two measurements captured in groups 1-2.
fn two_sides(caps: &Captures<'_>, default: &str) -> String {
    estimate_lot_size([caps.get(1), caps.get(2), None, None], default)
}

/// Estimate from the four measurements captured in groups 1-4.
fn four_sides(caps: &Captures<'_>, default: &str) -> String {
    estimate_lot_size([caps.get(1), caps.get(2), caps.get(3), caps.get(4)], default)
}

/// The `area` group, or `""` (which reads as zero).
fn area<'t>(caps: &Captures<'t>) -> &'t str {
    caps.name("area").unwrap_or_default()
}

/// The `area` group of a leading-dot value (".575 ha"), as `"0.575 "`.
fn leading_dot_area(caps: &Captures<'_>) -> String {
    format!("0.{}", area(caps))
}

pub fn get() -> Vec<Rule> {
    vec![
        // --- Exact raw values ---------------------------------------------------
        rule! { name: "under 0.5 acres (exact)", literal: "Under 0.5 Acres|under 1/2 acre", then: "< 0.5 acres" },
        rule! { name: "0-4,050 sqft (exact)", literal: "0-4,050 sqft", then: "< 0.093 acres" },
        rule! { name: "tbd with 0-4,050 sqft (exact)", literal: "TBD|0-4,050 sqft", then: "< 0.093 acres" },
        rule! { name: "3/4 acre with .5 - 9.99 acres (exact)", literal: "3/4 acre|.5 - 9.99 acres", then: "0.75 acres" },
        rule! { name: "1/2 acre with .5 - 9.99 acres (exact)", literal: "1/2 Acre|.5 - 9.99 acres", then: "0.50 acres" },
        rule! { name: "n/a with under 1/2 acre (exact)", literal: "N/A|under 1/2 acre", then: "< 0.5 acres" },
        rule! {
            name: "n/a or unknown",
            pattern: r"N/A(?:CONDO)?|Unknown",
            case_sensitive: true,
            then: "Unknown",
        },
        // --- Dimensions with a bucket label -------------------------------------
        rule! {
            name: "two sides, 3/4 - 1 ac",
            pattern: r"^({num}){sep}({num})\s*\|32,670 - 43,559 sqft \(3/4 - 1 ac\)$",
            buckets: DIGITS_PIPE,
            prod: |caps| two_sides(caps, "0.75 - 1 acres"),
        },
        rule! {
            name: "four sides, 3/4 - 1 ac",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})\s*\|32,670 - 43,559 sqft \(3/4 - 1 ac\)$",
            buckets: DIGITS_PIPE,
            prod: |caps| four_sides(caps, "0.75 - 1 acres"),
        },
        rule! {
            name: "two sides, 1/2 - 3/4 ac",
            pattern: r"^({num}){sep}({num})\s*\|21,780 - 32,669 sqft \(1/2 - 3/4 ac\)$",
            buckets: DIGITS_PIPE,
            prod: |caps| two_sides(caps, "0.5 - 0.75 acres"),
        },
        rule! {
            name: "four sides, 1/2 - 3/4 ac",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})\s*\|21,780 - 32,669 sqft \(1/2 - 3/4 ac\)$",
            buckets: DIGITS_PIPE,
            prod: |caps| four_sides(caps, "0.5 - 0.75 acres"),
        },
        rule! {
            name: "two sides, 1/4 - 1/2 ac",
            pattern: r"^({num}){sep}({num})\s*\|10,890 - 21,799 sqft \(1/4 - 1/2 ac\)$",
            buckets: DIGITS_PIPE,
            prod: |caps| two_sides(caps, "0.25 - 0.5 acres"),
        },
        rule! {
            name: "four sides, 1/4 - 1/2 ac",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})\s*\|10,890 - 21,799 sqft \(1/4 - 1/2 ac\)$",
            buckets: DIGITS_PIPE,
            prod: |caps| four_sides(caps, "0.25 - 0.5 acres"),
        },
        rule! {
            name: "two sides, 7,251 - 10,889 sqft",
            pattern: r"^({num}){sep}({num})\s*\|7,251 - 10,889 sqft$",
            buckets: DIGITS_PIPE,
            prod: |caps| two_sides(caps, "0.17 - 0.25 acres"),
        },
        rule! {
            name: "four sides, 7,251 - 10,889 sqft",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})\s*\|7,251 - 10,889 sqft$",
            buckets: DIGITS_PIPE,
            prod: |caps| four_sides(caps, "0.17 - 0.25 acres"),
        },
        rule! {
            name: "square feet",
            pattern: r"^(?<area>{num})\s*{sqft}$",
            buckets: DIGITS,
            prod: |caps| acres_from_square_feet(area(caps)),
        },
        rule! {
            name: "two sides, under 1/2 acre",
            pattern: r"^({num}){sep}({num})\s*\|{under_half}$",
            buckets: DIGITS_PIPE,
            prod: |caps| two_sides(caps, "< 0.5 acres"),
        },
        rule! {
            name: "two sides, 0-4,050 sqft",
            pattern: r"^({num}){sep}({num})\s*\|0-4,050 sqft$",
            buckets: DIGITS_PIPE,
            prod: |caps| two_sides(caps, "< 0.093 acres"),
        },
        rule! {
            name: "two sides, 4,051 - 7,250 sqft",
            pattern: r"^({num}){sep}({num})\s*\|4,051 - 7,250 sqft$",
            buckets: DIGITS_PIPE,
            prod: |caps| two_sides(caps, "0.093 - 0.166 acres"),
        },
        rule! {
            name: "four sides, .5 - 9.99 acres",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})\s*\|\.5 - 9\.99 acres$",
            buckets: DIGITS_PIPE,
            prod: |caps| four_sides(caps, ".5 - 9.99 acres"),
        },
        rule! {
            name: "two sides, .5 - 9.99 acres",
            pattern: r"^({num}){sep}({num})\s*\|\.5 - 9\.99 acres$",
            buckets: DIGITS_PIPE,
            prod: |caps| two_sides(caps, ".5 - 9.99 acres"),
        },
        rule! {
            name: "four sides, 4,051 - 7,250 sqft",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})\s*\|4,051 - 7,250 sqft$",
            buckets: DIGITS_PIPE,
            prod: |caps| four_sides(caps, "0.093 - 0.166 acres"),
        },
        // --- Area with a unit ---------------------------------------------------
        rule! {
            name: "square feet with label",
            pattern: r"^(?<area>{num})\s*{sqft}\s*\|.*$",
            buckets: DIGITS_PIPE,
            prod: |caps| acres_from_square_feet(area(caps)),
        },
        rule! {
            name: "square meters with label",
            pattern: r"^(?<area>{num})\s*{sqm}\s*\|.*$",
            buckets: DIGITS_PIPE,
            prod: |caps| acres_from_square_meters(area(caps)),
        },
        rule! {
            name: "four sides, 1 - 3 acres",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})\s*\|1 - 3 acres$",
            buckets: DIGITS_PIPE,
            prod: |caps| four_sides(caps, "1 - 3 acres"),
        },
        rule! {
            name: "four sides, under 1/2 acre",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})\s*\|{under_half}$",
            buckets: DIGITS_PIPE,
            prod: |caps| four_sides(caps, "< 0.5 acres"),
        },
        rule! {
            name: "hectares, leading dot",
            pattern: r"^\.(?<area>{num})\s*{hectares}.*$",
            buckets: DIGITS,
            prod: |caps| acres_from_hectares(leading_dot_area(caps)),
        },
        rule! {
            name: "hectares",
            pattern: r"^(?<area>{num})\s*{hectares}.*$",
            buckets: DIGITS,
            prod: |caps| acres_from_hectares(area(caps)),
        },
        // --- Stated acreage -----------------------------------------------------
        rule! {
            name: "acres, leading dot",
            pattern: r"^\.(?<area>{num})\s*{acres}.*$",
            buckets: DIGITS,
            prod: |caps| echo_acres(leading_dot_area(caps)),
        },
        rule! {
            name: "m2 with under 1/2 acre",
            pattern: r"^(?<area>{num})\s*m2\|under 1/2 acre$",
            buckets: DIGITS_PIPE,
            prod: |caps| acres_from_square_meters(area(caps)),
        },
        rule! {
            name: "square meters",
            pattern: r"^(?<area>{num})\s*square meters$",
            buckets: DIGITS,
            prod: |caps| acres_from_square_meters(area(caps)),
        },
        rule! {
            name: "acres with label",
            pattern: r"^(?<area>{num})\s*{acres}\|.*$",
            buckets: DIGITS_PIPE,
            prod: |caps| echo_acres(area(caps)),
        },
        rule! {
            name: "approximate acres with label",
            pattern: r"^~(?<area>{num})\s*{acres}\|.*$",
            buckets: DIGITS_PIPE,
            prod: |caps| echo_acres(area(caps)),
        },
        rule! {
            name: "acres",
            pattern: r"^(?<area>{num})\s*{acres}$",
            buckets: DIGITS,
            prod: |caps| echo_acres(area(caps)),
        },
        // --- Bare dimensions ----------------------------------------------------
        rule! {
            name: "two sides",
            pattern: r"^({num}){sep}({num})\s*(?:{sqft})?$",
            buckets: DIGITS,
            prod: |caps| two_sides(caps, ""),
        },
        rule! {
            name: "four sides",
            pattern: r"^({num}){sep}({num}){sep}({num}){sep}({num})$",
            buckets: DIGITS,
            prod: |caps| four_sides(caps, ""),
        },
        // --- Bucket label only --------------------------------------------------
        rule! { name: "label 0-4,050 sqft", pattern: r"^.*\|0-4,050 sqft$", buckets: PIPE, then: "< 0.093 acres" },
        rule! {
            name: "label 4,051 - 7,250 sqft",
            pattern: r"^.*\|4,051 - 7,250 sqft$",
            buckets: PIPE,
            then: "0.093 - 0.166 acres",
        },
        rule! {
            name: "label 7,251 - 10,889 sqft",
            pattern: r"^.*\|7,251 - 10,889 sqft$",
            buckets: PIPE,
            then: "0.17 - 0.25 acres",
        },
        rule! {
            name: "label 1/4 - 1/2 ac",
            pattern: r"^.*\|10,890 - 21,799 sqft \(1/4 - 1/2 ac\)$",
            buckets: PIPE,
            then: "0.25 - 0.5 acres",
        },
        rule! {
            name: "label 1/2 - 3/4 ac",
            pattern: r"^.*\|21,780 - 32,669 sqft \(1/2 - 3/4 ac\)$",
            buckets: PIPE,
            then: "0.5 - 0.75 acres",
        },
        rule! {
            name: "label 3/4 - 1 ac",
            pattern: r"^.*\|32,670 - 43,559 sqft \(3/4 - 1 ac\)$",
            buckets: PIPE,
            then: "0.75 - 1 acres",
        },
        rule! { name: "label 1 - 3 acres", pattern: r"^.*\|1 - 3 acres$", buckets: PIPE, then: "1 - 3 acres" },
        rule! { name: "label 3 - 10 acres", pattern: r"^.*\|3 - 10 acres$", buckets: PIPE, then: "3 - 10 acres" },
        rule! { name: "label 10 - 50 acres", pattern: r"^.*\|10 - 50 acres$", buckets: PIPE, then: "10 - 50 acres" },
        rule! { name: "label 50+ acres", pattern: r"^.*\|50\+ acres$", buckets: PIPE, then: "50+ acres" },
        rule! { name: "label 10+ acres", pattern: r"^.*\|10\+ acres$", buckets: PIPE, then: "10+ acres" },
        rule! { name: "label under 1/2 acre", pattern: r"^.*\|under 1/2 acre$", buckets: PIPE, then: "< 0.5 acres" },
        // --- Fractional acre prefix ---------------------------------------------
        rule! { name: "1/2 acre", pattern: r"^1/2 acre\|.*$", buckets: PIPE, then: "0.5 acres" },
        rule! { name: "1/3 acre", pattern: r"^1/3 acre\|.*$", buckets: PIPE, then: "0.33 acres" },
        rule! { name: "1/4 acre", pattern: r"^1/4 acre\|.*$", buckets: PIPE, then: "0.25 acres" },
        rule! { name: "3/4 acre", pattern: r"^3/4 acre\|.*$", buckets: PIPE, then: "0.75 acres" },
        rule! {
            name: "label .5 - 9.99 acres",
            pattern: r"^.*\|\.5 - 9\.99 acres$",
            buckets: PIPE,
            then: "0.5 - 9.99 acres",
        },
    ]
}
