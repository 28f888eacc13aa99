//! Daily API quota tracking.
//!
//! A stateless calculation: the caller supplies the running `used` total on
//! every call, and gets back a snapshot of where the day's quota stands.

use log::warn;
use serde::{Deserialize, Serialize};

/// Consumption above this share of the daily limit is critical.
pub const CRITICAL_PERCENT: f64 = 90.0;
/// Consumption above this share of the daily limit should slow down.
pub const THROTTLE_PERCENT: f64 = 85.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaSnapshot {
    pub remaining: f64,
    pub percent_used: f64,
    pub is_critical: bool,
    pub should_throttle: bool,
    pub can_proceed: bool,
}

/// Computes the quota position for one prospective operation.
///
/// `can_proceed` asks whether `used + current_cost` still fits under
/// `daily_limit`. A zero (or negative) limit counts as fully consumed.
pub fn validate_quota_remaining(current_cost: f64, daily_limit: f64, used: f64) -> QuotaSnapshot {
    let remaining = daily_limit - used;
    let percent_used = if daily_limit > 0.0 {
        used / daily_limit * 100.0
    } else {
        100.0
    };

    let snapshot = QuotaSnapshot {
        remaining,
        percent_used,
        is_critical: percent_used > CRITICAL_PERCENT,
        should_throttle: percent_used > THROTTLE_PERCENT,
        can_proceed: used + current_cost <= daily_limit,
    };

    if snapshot.is_critical {
        warn!(
            "API quota critical: {:.2}% of daily limit used, {} remaining",
            snapshot.percent_used, snapshot.remaining
        );
    }

    snapshot
}
