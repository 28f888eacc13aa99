mod common;

use ads_validator::currency::{currency_to_micros, micros_to_currency};
use ads_validator::models::payload_from_str;
use ads_validator::quota::validate_quota_remaining;
use ads_validator::validation::{
    validate_budget, validate_campaign_update, validate_cpc_bid_micros, validate_keyword_update,
    validate_quality_score,
};
use common::{payload, valid_campaign_payload, valid_keyword_payload};
use serde_json::json;

#[test]
fn test_micros_round_trip_stays_within_one_cent() {
    for amount in [0.0, 0.01, 0.99, 1.50, 2.50, 19.99, 42.424242, 123.456789, 999_999.99] {
        let back = micros_to_currency(currency_to_micros(amount));
        assert!(
            (back - amount).abs() <= 0.01,
            "{amount} came back as {back}"
        );
    }
}

#[test]
fn test_budget_validity_tracks_the_documented_range() {
    for (budget, expect) in [
        (0.01, true),
        (0.009, false),
        (50.0, true),
        (999_999.99, true),
        (999_999.995, false),
        (1_000_000.0, false),
        (0.0, false),
        (-5.0, false),
    ] {
        assert_eq!(
            validate_budget(&json!(budget)).is_ok(),
            expect,
            "budget {budget}"
        );
    }
    assert!(validate_budget(&json!("x")).is_err());
}

#[test]
fn test_cpc_micros_validity_tracks_floor_and_cap() {
    for (micros, max_bid, expect) in [
        (10_000_i64, 10_000.0, true),
        (9_999, 10_000.0, false),
        (50_000, 0.05, true),
        (50_001, 0.05, false),
        (10_000_000_000, 10_000.0, true),
        (10_000_000_001, 10_000.0, false),
        // A cap below the floor leaves no valid bids at all.
        (10_000, 0.009, false),
    ] {
        assert_eq!(
            validate_cpc_bid_micros(&json!(micros), max_bid).is_ok(),
            expect,
            "{micros} micros against max bid {max_bid}"
        );
    }
}

#[test_log::test]
fn test_empty_campaign_update_is_vacuously_valid() {
    let result = validate_campaign_update(&payload(json!({})));
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test_log::test]
fn test_full_campaign_payload_passes() {
    let result = validate_campaign_update(&valid_campaign_payload());
    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
}

#[test_log::test]
fn test_empty_name_is_the_only_error_reported() {
    let result = validate_campaign_update(&payload(json!({ "name": "", "budget": 50 })));
    assert!(!result.is_valid);
    assert_eq!(result.errors, ["Campaign name must be a non-empty string"]);
}

#[test_log::test]
fn test_reversed_dates_produce_exactly_one_error() {
    let result = validate_campaign_update(&payload(json!({
        "start_date": "2024-01-01",
        "end_date": "2023-01-01"
    })));
    assert!(!result.is_valid);
    assert_eq!(result.errors, ["End date must be after start date"]);
}

#[test_log::test]
fn test_typical_keyword_payload_passes() {
    let result = validate_keyword_update(&valid_keyword_payload());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_quota_with_zero_limit_blocks_everything() {
    let snapshot = validate_quota_remaining(5.0, 0.0, 0.0);
    assert_eq!(snapshot.percent_used, 100.0);
    assert!(snapshot.is_critical);
    assert!(!snapshot.can_proceed);
}

#[test]
fn test_quality_score_edge_cases() {
    assert!(validate_quality_score(&json!(null)).is_ok());
    assert!(validate_quality_score(&json!(11)).is_err());
    assert!(validate_quality_score(&json!(7.5)).is_err());
}

#[test]
fn test_payload_file_contents_flow_through_validation() {
    // What the driver does: parse a JSON document, then validate it.
    let raw = r#"{
        "name": "Spring Sale",
        "budget": 120.50,
        "status": "PAUSED",
        "type": "DISPLAY",
        "start_date": "2024-03-01",
        "end_date": "2024-05-31"
    }"#;
    let result = validate_campaign_update(&payload_from_str(raw).unwrap());
    assert!(result.is_valid);

    let raw = r#"{ "name": "Spring Sale", "budget": "120.50" }"#;
    let result = validate_campaign_update(&payload_from_str(raw).unwrap());
    assert_eq!(result.errors, ["Budget must be a number"]);
}

#[test]
fn test_non_object_payloads_are_rejected_before_validation() {
    assert!(payload_from_str("[]").is_err());
    assert!(payload_from_str("\"name\"").is_err());
    assert!(payload_from_str("{ broken").is_err());
}
