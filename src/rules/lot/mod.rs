//! Lot-size rules: the canonical token classes and rule table, and the numeric
//! helpers their handlers are built from.

pub mod classes;
pub mod convert;
pub mod estimate;
pub mod helpers;
pub mod rules;
