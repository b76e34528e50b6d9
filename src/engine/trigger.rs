//! Trigger scanning (input pre-classification).
//!
//! This module inspects the cleaned input and produces the coarse buckets the
//! matcher uses to skip rules that cannot possibly match.
//!
//! ## Design notes
//!
//! - The scan is a couple of byte searches; it must stay much cheaper than a
//!   regex evaluation to be worth doing.
//! - Buckets describe the *cleaned* input, the same string the rules see.

use super::compiled_rules::BucketMask;

/// Input characteristics detected from the cleaned input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if input.contains('|') {
            buckets |= BucketMask::HAS_PIPE;
        }

        TriggerInfo { buckets }
    }

    /// Whether every bucket in `required` was seen.
    pub fn satisfies(&self, required: BucketMask) -> bool {
        self.buckets.contains(required)
    }
}
