use crate::TokenClass;

/// Token classes referenced by the lot-size rule table.
pub fn get() -> &'static [TokenClass] {
    CLASSES
}

static CLASSES: &[TokenClass] = &[
    // Dimension separator: "50x100", "50 X 100", "50 by 100".
    TokenClass { name: "sep", alternatives: &[r"\s*x\s*", r"\s*by\s*"] },
    // One measurement: digits with thousands commas or stray spaces, an
    // optional fraction, and an optional foot mark ("10,147", "50'", "97 ft").
    TokenClass { name: "num", alternatives: &[r"[0-9][0-9, ]*(?:\.[0-9 ]*)? *(?:'|ft)?"] },
    TokenClass { name: "under_half", alternatives: &[r"under 1/2 acre"] },
    TokenClass { name: "hectares", alternatives: &[r"ha", r"hectares", r"hec"] },
    TokenClass { name: "acres", alternatives: &[r"acres?"] },
    TokenClass {
        name: "sqft",
        alternatives: &[r"sq ft", r"sq\.?", r"ft\.?", r"sq/ft", r"sq'", r"sqft", r"sq feet"],
    },
    TokenClass {
        name: "sqm",
        alternatives: &[r"square meters", r"sq\.? ?meters\.?", r"sq\.? ?m\.?", r"m", r"sq\.? ?metres\.?"],
    },
];
