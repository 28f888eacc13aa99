//! Per-field validators.
//!
//! Each function checks one loosely typed payload value against a fixed rule
//! and returns the human-readable reason on failure. A wrong-typed value is
//! an ordinary invalid outcome, never a panic or a crate-level error.

use serde_json::Value;

use crate::currency::currency_to_micros;
use crate::models::campaign::{CampaignStatus, CampaignType, MatchType};

// Platform limits, in local currency unless stated otherwise.
pub const MIN_BUDGET: f64 = 0.01;
pub const MAX_BUDGET: f64 = 999_999.99;
pub const MIN_BID: f64 = 0.01;
pub const MIN_BID_MICROS: i64 = 10_000;
/// Cap applied to micros bids when the caller does not supply one.
pub const DEFAULT_MAX_BID: f64 = 10_000.0;

/// Campaign name: non-empty string, 1-255 characters.
pub fn validate_campaign_name(value: &Value) -> Result<(), String> {
    let name = match value.as_str() {
        Some(s) if !s.is_empty() => s,
        _ => return Err("Campaign name must be a non-empty string".to_string()),
    };

    let length = name.chars().count();
    if length > 255 {
        return Err(format!(
            "Campaign name must be 1-255 characters (got {})",
            length
        ));
    }

    Ok(())
}

/// Budget in local currency: numeric, between [`MIN_BUDGET`] and [`MAX_BUDGET`].
pub fn validate_budget(value: &Value) -> Result<(), String> {
    let amount = match value.as_f64() {
        Some(n) => n,
        None => return Err("Budget must be a number".to_string()),
    };

    if amount < MIN_BUDGET {
        return Err(format!("Budget must be at least {}", MIN_BUDGET));
    }
    if amount > MAX_BUDGET {
        return Err(format!("Budget exceeds maximum of {}", MAX_BUDGET));
    }

    Ok(())
}

/// Bid in local currency: numeric, at least [`MIN_BID`]. No upper bound.
pub fn validate_bid(value: &Value) -> Result<(), String> {
    let bid = match value.as_f64() {
        Some(n) => n,
        None => return Err("Bid must be a number".to_string()),
    };

    if bid < MIN_BID {
        return Err(format!("Bid must be at least {}", MIN_BID));
    }

    Ok(())
}

/// Quality score: null is valid (the platform reports none for new
/// keywords); otherwise an integer 1-10.
pub fn validate_quality_score(value: &Value) -> Result<(), String> {
    if value.is_null() {
        return Ok(());
    }

    let score = match value.as_i64() {
        Some(n) => n,
        None => return Err("Quality score must be an integer".to_string()),
    };

    if !(1..=10).contains(&score) {
        return Err("Quality score must be 1-10".to_string());
    }

    Ok(())
}

/// CPC bid in micros: integer, at least [`MIN_BID_MICROS`], at most
/// `max_bid` converted to micros (truncating). Pass [`DEFAULT_MAX_BID`]
/// when no caller-specific cap applies.
pub fn validate_cpc_bid_micros(value: &Value, max_bid: f64) -> Result<(), String> {
    let bid_micros = match value.as_i64() {
        Some(n) => n,
        None => return Err("Bid (micros) must be an integer".to_string()),
    };

    if bid_micros < MIN_BID_MICROS {
        return Err(format!(
            "Bid must be at least {} micros ($0.01)",
            MIN_BID_MICROS
        ));
    }

    let max_bid_micros = currency_to_micros(max_bid);
    if bid_micros > max_bid_micros {
        return Err(format!(
            "Bid exceeds maximum of {} micros (${})",
            max_bid_micros, max_bid
        ));
    }

    Ok(())
}

/// Campaign status: one of ENABLED, PAUSED, REMOVED.
pub fn validate_campaign_status(value: &Value) -> Result<(), String> {
    match value.as_str().and_then(CampaignStatus::parse) {
        Some(_) => Ok(()),
        None => Err(format!("Status must be one of {:?}", CampaignStatus::NAMES)),
    }
}

/// Campaign type: one of SEARCH, DISPLAY, SHOPPING, VIDEO, PERFORMANCE_MAX.
pub fn validate_campaign_type(value: &Value) -> Result<(), String> {
    match value.as_str().and_then(CampaignType::parse) {
        Some(_) => Ok(()),
        None => Err(format!(
            "Campaign type must be one of {:?}",
            CampaignType::NAMES
        )),
    }
}

/// Keyword text: non-empty string, 1-80 characters.
pub fn validate_keyword_text(value: &Value) -> Result<(), String> {
    let text = match value.as_str() {
        Some(s) if !s.is_empty() => s,
        _ => return Err("Keyword text must be a non-empty string".to_string()),
    };

    let length = text.chars().count();
    if length > 80 {
        return Err(format!(
            "Keyword text must be 1-80 characters (got {})",
            length
        ));
    }

    Ok(())
}

/// Keyword match type: one of BROAD, PHRASE, EXACT.
pub fn validate_match_type(value: &Value) -> Result<(), String> {
    match value.as_str().and_then(MatchType::parse) {
        Some(_) => Ok(()),
        None => Err(format!("Match type must be one of {:?}", MatchType::NAMES)),
    }
}
