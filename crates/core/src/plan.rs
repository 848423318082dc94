//! Plan documents: a named campaign plan with month buckets of campaigns plus
//! the auxiliary collections the planner carries (custom formats, saved UTM
//! links, creative-text groups, keyword ad-groups).

use crate::months::{sort_month_keys, Language};
use crate::types::Campaign;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A saved campaign plan. Persisted as a whole document; the store never
/// merges at field level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanData {
    pub id: String,
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "user_id", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub campaign_name: String,
    pub objective: String,
    pub target_audience: String,
    pub location: String,
    pub total_investment: f64,
    pub logo_url: String,
    #[serde(default)]
    pub custom_formats: Vec<String>,
    #[serde(default)]
    pub utm_links: Vec<UtmLink>,
    /// month-key -> campaigns planned for that month.
    #[serde(default)]
    pub months: HashMap<String, Vec<Campaign>>,
    /// channel name -> creative text groups.
    #[serde(default)]
    pub creatives: HashMap<String, Vec<CreativeTextGroup>>,
    #[serde(default)]
    pub ad_groups: Vec<AdGroup>,
    #[serde(rename = "is_public", default)]
    pub is_public: bool,
}

impl PlanData {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            user_id: Some(user_id.into()),
            campaign_name: name.into(),
            objective: String::new(),
            target_audience: String::new(),
            location: String::new(),
            total_investment: 0.0,
            logo_url: String::new(),
            custom_formats: Vec::new(),
            utm_links: Vec::new(),
            months: HashMap::new(),
            creatives: HashMap::new(),
            ad_groups: Vec::new(),
            is_public: false,
        }
    }

    /// Ensure a month bucket exists. Existing campaigns are left untouched.
    pub fn add_month(&mut self, month_key: &str) {
        self.months.entry(month_key.to_string()).or_default();
    }

    /// Insert or replace a campaign in a month bucket, matching on id.
    pub fn upsert_campaign(&mut self, month_key: &str, campaign: Campaign) {
        let bucket = self.months.entry(month_key.to_string()).or_default();
        match bucket.iter_mut().find(|c| c.id == campaign.id) {
            Some(existing) => *existing = campaign,
            None => bucket.push(campaign),
        }
    }

    /// Remove a campaign by id. Removing the last campaign of a month drops
    /// the month entry itself. Returns whether anything was removed.
    pub fn remove_campaign(&mut self, month_key: &str, campaign_id: &str) -> bool {
        let Some(bucket) = self.months.get_mut(month_key) else {
            return false;
        };
        let before = bucket.len();
        bucket.retain(|c| c.id != campaign_id);
        let removed = bucket.len() < before;
        if bucket.is_empty() {
            self.months.remove(month_key);
        }
        removed
    }

    /// All campaigns across every month, in no particular order.
    pub fn all_campaigns(&self) -> impl Iterator<Item = &Campaign> {
        self.months.values().flatten()
    }

    /// Month keys in chronological order for the given language.
    pub fn month_keys_sorted(&self, language: Language) -> Vec<String> {
        let mut keys: Vec<String> = self.months.keys().cloned().collect();
        keys.sort_by(|a, b| sort_month_keys(language, a, b));
        keys
    }

    /// Add a plan-level custom creative format if not already present.
    pub fn add_custom_format(&mut self, format: &str) {
        if !self.custom_formats.iter().any(|f| f == format) {
            self.custom_formats.push(format.to_string());
        }
    }
}

/// A saved UTM-tagged link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtmLink {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub full_url: String,
    pub url: String,
    pub source: String,
    pub medium: String,
    pub campaign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Ad copy variants for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeTextGroup {
    pub id: i64,
    pub name: String,
    pub context: String,
    pub headlines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_headlines: Option<Vec<String>>,
    pub descriptions: Vec<String>,
}

/// A keyword ad-group for search campaigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroup {
    pub id: String,
    pub name: String,
    pub keywords: Vec<KeywordSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSuggestion {
    pub keyword: String,
    pub volume: f64,
    /// Estimated monthly clicks based on volume and competitiveness.
    pub click_potential: f64,
    pub min_cpc: f64,
    pub max_cpc: f64,
}
