pub mod fields;
pub mod update;

pub use fields::{
    validate_bid, validate_budget, validate_campaign_name, validate_campaign_status,
    validate_campaign_type, validate_cpc_bid_micros, validate_keyword_text, validate_match_type,
    validate_quality_score, DEFAULT_MAX_BID, MAX_BUDGET, MIN_BID, MIN_BID_MICROS, MIN_BUDGET,
};
pub use update::{validate_campaign_update, validate_keyword_update};
