//! Update-payload aggregation.
//!
//! Each aggregator checks only the recognized fields present in the payload
//! ("partial update" semantics) and collects every failure reason into one
//! [`ValidationResult`], in a fixed field order so output is deterministic.

use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

use crate::models::{UpdatePayload, ValidationResult};
use crate::validation::fields;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a campaign update payload.
///
/// Recognized fields: `name`, `budget`, `status`, `type`, `start_date`,
/// `end_date`. Dates are only checked when both are present.
pub fn validate_campaign_update(updates: &UpdatePayload) -> ValidationResult {
    let mut errors = Vec::new();
    let warnings = Vec::new();

    if let Some(value) = updates.get("name") {
        collect(&mut errors, fields::validate_campaign_name(value));
    }
    if let Some(value) = updates.get("budget") {
        collect(&mut errors, fields::validate_budget(value));
    }
    if let Some(value) = updates.get("status") {
        collect(&mut errors, fields::validate_campaign_status(value));
    }
    if let Some(value) = updates.get("type") {
        collect(&mut errors, fields::validate_campaign_type(value));
    }

    if let (Some(start), Some(end)) = (updates.get("start_date"), updates.get("end_date")) {
        // One message per call: either the pair fails to parse or it parses
        // and the ordering is wrong, never both. Which of the two dates was
        // malformed is deliberately not reported.
        match (parse_date(start), parse_date(end)) {
            (Some(start), Some(end)) => {
                if end <= start {
                    errors.push("End date must be after start date".to_string());
                }
            }
            _ => errors.push("Invalid date format (use YYYY-MM-DD)".to_string()),
        }
    }

    if !errors.is_empty() {
        debug!("campaign update rejected with {} error(s)", errors.len());
    }

    ValidationResult::new(errors, warnings)
}

/// Validate a keyword update payload.
///
/// Recognized fields: `text`, `match_type`, `max_cpc` (currency),
/// `max_cpc_micros` (validated against the default bid cap), `status`.
pub fn validate_keyword_update(updates: &UpdatePayload) -> ValidationResult {
    let mut errors = Vec::new();
    let warnings = Vec::new();

    if let Some(value) = updates.get("text") {
        collect(&mut errors, fields::validate_keyword_text(value));
    }
    if let Some(value) = updates.get("match_type") {
        collect(&mut errors, fields::validate_match_type(value));
    }
    if let Some(value) = updates.get("max_cpc") {
        collect(&mut errors, fields::validate_bid(value));
    }
    if let Some(value) = updates.get("max_cpc_micros") {
        collect(&mut errors, fields::validate_cpc_bid_micros(value, fields::DEFAULT_MAX_BID));
    }
    if let Some(value) = updates.get("status") {
        // Keywords share the campaign status set.
        collect(&mut errors, fields::validate_campaign_status(value));
    }

    if !errors.is_empty() {
        debug!("keyword update rejected with {} error(s)", errors.len());
    }

    ValidationResult::new(errors, warnings)
}

fn collect(errors: &mut Vec<String>, checked: Result<(), String>) {
    if let Err(reason) = checked {
        errors.push(reason);
    }
}

fn parse_date(value: &Value) -> Option<NaiveDate> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
}
