use ads_validator::models::UpdatePayload;
use serde_json::{json, Value};

// Helper to turn a json! object literal into a payload map
pub fn payload(value: Value) -> UpdatePayload {
    value
        .as_object()
        .cloned()
        .expect("payload fixture must be a JSON object")
}

// A fully populated, valid campaign update
pub fn valid_campaign_payload() -> UpdatePayload {
    payload(json!({
        "name": "Q4 Sale Campaign",
        "budget": 5000,
        "status": "ENABLED",
        "type": "SEARCH",
        "start_date": "2024-10-01",
        "end_date": "2024-12-31"
    }))
}

// A fully populated, valid keyword update
pub fn valid_keyword_payload() -> UpdatePayload {
    payload(json!({
        "text": "running shoes",
        "match_type": "PHRASE",
        "max_cpc": 2.50
    }))
}
