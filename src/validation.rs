//! Advisory range checks for the two form fields.
//!
//! These only pick the inline hint text. Submission is never blocked here;
//! the calculation service decides what it accepts.

use crate::config::{
    HINT_OK, MAX_REPS, MAX_WEIGHT, MIN_REPS, MIN_WEIGHT, REPS_RANGE_MESSAGE, WEIGHT_RANGE_MESSAGE,
};

/// `true` iff `1 <= w <= 2000`. NaN (empty field) is out of range.
pub fn validate_weight(w: f64) -> bool {
    (MIN_WEIGHT..=MAX_WEIGHT).contains(&w)
}

/// `true` iff `1 <= r <= 12`.
pub fn validate_reps(r: f64) -> bool {
    (MIN_REPS..=MAX_REPS).contains(&r)
}

/// Hint shown under a field: "ok" or that field's range message.
pub fn hint_text(valid: bool, range_message: &'static str) -> &'static str {
    if valid {
        HINT_OK
    } else {
        range_message
    }
}

pub fn weight_hint(w: f64) -> &'static str {
    hint_text(validate_weight(w), WEIGHT_RANGE_MESSAGE)
}

pub fn reps_hint(r: f64) -> &'static str {
    hint_text(validate_reps(r), REPS_RANGE_MESSAGE)
}
