//! Currency <-> micros conversion.
//!
//! Monetary fields on the Ads API travel as integer micros, where
//! 1,000,000 micros equal one unit of local currency.

pub const MICROS_PER_UNIT: i64 = 1_000_000;

/// Converts a currency amount (e.g. `5.00`) to micros (`5_000_000`).
///
/// Truncates toward zero, matching the platform's integer semantics:
/// `currency_to_micros(0.0000015)` is `1`, not `2`.
pub fn currency_to_micros(amount: f64) -> i64 {
    (amount * MICROS_PER_UNIT as f64) as i64
}

/// Converts micros back to a currency amount.
///
/// Lossy below cent precision: amounts whose value is not an exact multiple
/// of one micro do not round-trip through [`currency_to_micros`] exactly.
/// Callers comparing round-tripped amounts should allow a one-cent tolerance.
pub fn micros_to_currency(micros: i64) -> f64 {
    micros as f64 / MICROS_PER_UNIT as f64
}
