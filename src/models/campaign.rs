use serde::{Deserialize, Serialize};

/// Campaign serving status, spelled the way the Ads API wire format does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Enabled,
    Paused,
    Removed,
}

impl CampaignStatus {
    pub const NAMES: &'static [&'static str] = &["ENABLED", "PAUSED", "REMOVED"];

    /// Case-sensitive exact match against the wire names.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ENABLED" => Some(CampaignStatus::Enabled),
            "PAUSED" => Some(CampaignStatus::Paused),
            "REMOVED" => Some(CampaignStatus::Removed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Enabled => "ENABLED",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Removed => "REMOVED",
        }
    }
}

/// Campaign channel type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignType {
    Search,
    Display,
    Shopping,
    Video,
    PerformanceMax,
}

impl CampaignType {
    pub const NAMES: &'static [&'static str] =
        &["SEARCH", "DISPLAY", "SHOPPING", "VIDEO", "PERFORMANCE_MAX"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SEARCH" => Some(CampaignType::Search),
            "DISPLAY" => Some(CampaignType::Display),
            "SHOPPING" => Some(CampaignType::Shopping),
            "VIDEO" => Some(CampaignType::Video),
            "PERFORMANCE_MAX" => Some(CampaignType::PerformanceMax),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignType::Search => "SEARCH",
            CampaignType::Display => "DISPLAY",
            CampaignType::Shopping => "SHOPPING",
            CampaignType::Video => "VIDEO",
            CampaignType::PerformanceMax => "PERFORMANCE_MAX",
        }
    }
}

/// Keyword matching strictness mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    Broad,
    Phrase,
    Exact,
}

impl MatchType {
    pub const NAMES: &'static [&'static str] = &["BROAD", "PHRASE", "EXACT"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "BROAD" => Some(MatchType::Broad),
            "PHRASE" => Some(MatchType::Phrase),
            "EXACT" => Some(MatchType::Exact),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Broad => "BROAD",
            MatchType::Phrase => "PHRASE",
            MatchType::Exact => "EXACT",
        }
    }
}
