//! Application-level configuration constants.

// Remote calculation service
pub const DEFAULT_CALC_ENDPOINT: &str = "https://one-rep-max-calc-api.herokuapp.com/api/v1/calc_1rm";

/// Endpoint used for submissions. Set `ONE_RM_API_URL` at build time to point
/// the client at another deployment.
pub fn calc_endpoint() -> &'static str {
    option_env!("ONE_RM_API_URL").unwrap_or(DEFAULT_CALC_ENDPOINT)
}

// Min/Max limits for input fields
pub const MIN_WEIGHT: f64 = 1.0;
pub const MAX_WEIGHT: f64 = 2000.0;
pub const WEIGHT_STEP: f64 = 0.1;
pub const MIN_REPS: f64 = 1.0;
pub const MAX_REPS: f64 = 12.0;

// Inline hint texts
pub const HINT_OK: &str = "ok";
pub const WEIGHT_RANGE_MESSAGE: &str =
    "Weight must be greater than or equal to 1 and less than or equal to 2000 (1 ≤ w ≤ 2000).";
pub const REPS_RANGE_MESSAGE: &str =
    "Reps must be greater than or equal to 1 and less than or equal to 12 (1 ≤ r ≤ 12).";

// UI constants
pub const PAGE_TITLE: &str = "1RM Calculator";
pub const PLACEHOLDER_MAX: &str = "?";
pub const PLACEHOLDER_CELL: &str = "...";
pub const CALCULATING_TEXT: &str = "Calculating...";
pub const CALCULATE_BUTTON_LABEL: &str =
    "Calculate button. Click this button to see the 1RM value and the weight at each percentage of 1RM.";
