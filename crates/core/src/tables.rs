//! Static planning data: audience-frequency constants, campaign-type metric
//! presets, and per-channel creative-format lists.
//!
//! Kept as a value passed into the engine rather than module-level globals so
//! tests and callers can substitute their own tables.

use crate::types::{BuyingUnit, Campaign};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default metric values seeded into a new campaign when its type is chosen,
/// before the first engine pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPreset {
    pub buying_unit: BuyingUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpm: Option<f64>,
    pub ctr: f64,
    pub conversion_rate: f64,
    pub connect_rate: f64,
}

impl CampaignPreset {
    /// Overwrite the campaign's seeded fields with this preset's values,
    /// leaving classification fields and budget untouched.
    pub fn apply(&self, campaign: &mut Campaign) {
        campaign.buying_unit = Some(self.buying_unit);
        campaign.cpc = self.cpc;
        campaign.cpm = self.cpm;
        campaign.ctr = Some(self.ctr);
        campaign.conversion_rate = Some(self.conversion_rate);
        campaign.connect_rate = Some(self.connect_rate);
    }
}

/// Lookup tables consumed by the metrics engine and the surrounding planner.
#[derive(Debug, Clone)]
pub struct LookupTables {
    frequency: HashMap<String, f64>,
    default_frequency: f64,
    presets: HashMap<String, CampaignPreset>,
    channel_formats: HashMap<String, Vec<String>>,
}

impl LookupTables {
    /// Assumed average impressions per unique viewer for a campaign type.
    /// Unknown or absent types fall back to a general average.
    pub fn frequency_for(&self, campaign_type: Option<&str>) -> f64 {
        campaign_type
            .and_then(|t| self.frequency.get(t))
            .copied()
            .unwrap_or(self.default_frequency)
    }

    pub fn preset_for(&self, campaign_type: &str) -> Option<&CampaignPreset> {
        self.presets.get(campaign_type)
    }

    /// Allowed creative formats for a channel, merged with the plan's custom
    /// formats and deduplicated. Unknown channels yield only the custom list.
    pub fn formats_for(&self, channel: &str, custom_formats: &[String]) -> Vec<String> {
        let mut formats: Vec<String> = self
            .channel_formats
            .get(channel)
            .cloned()
            .unwrap_or_default();
        for custom in custom_formats {
            if !formats.iter().any(|f| f == custom) {
                formats.push(custom.clone());
            }
        }
        formats
    }

    /// Known channel names, sorted for stable display.
    pub fn channels(&self) -> Vec<&str> {
        let mut channels: Vec<&str> = self.channel_formats.keys().map(String::as_str).collect();
        channels.sort_unstable();
        channels
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        let frequency = HashMap::from([
            ("Awareness".to_string(), 4.0),
            ("Reach".to_string(), 3.5),
            ("Traffic".to_string(), 1.8),
            ("Engagement".to_string(), 2.5),
            ("Lead Generation".to_string(), 2.2),
            ("Conversion".to_string(), 2.0),
            // Retargeting hits the same audience far more often.
            ("Retargeting".to_string(), 5.0),
        ]);

        let presets = HashMap::from([
            (
                "Awareness".to_string(),
                CampaignPreset {
                    buying_unit: BuyingUnit::Cpm,
                    cpc: None,
                    cpm: Some(18.0),
                    ctr: 1.2,
                    conversion_rate: 0.2,
                    connect_rate: 60.0,
                },
            ),
            (
                "Reach".to_string(),
                CampaignPreset {
                    buying_unit: BuyingUnit::Cpm,
                    cpc: None,
                    cpm: Some(12.0),
                    ctr: 0.9,
                    conversion_rate: 0.2,
                    connect_rate: 55.0,
                },
            ),
            (
                "Traffic".to_string(),
                CampaignPreset {
                    buying_unit: BuyingUnit::Cpc,
                    cpc: Some(1.5),
                    cpm: None,
                    ctr: 2.5,
                    conversion_rate: 1.0,
                    connect_rate: 80.0,
                },
            ),
            (
                "Engagement".to_string(),
                CampaignPreset {
                    buying_unit: BuyingUnit::Cpm,
                    cpc: None,
                    cpm: Some(15.0),
                    ctr: 1.5,
                    conversion_rate: 0.5,
                    connect_rate: 65.0,
                },
            ),
            (
                "Lead Generation".to_string(),
                CampaignPreset {
                    buying_unit: BuyingUnit::Cpc,
                    cpc: Some(2.0),
                    cpm: None,
                    ctr: 1.8,
                    conversion_rate: 7.0,
                    connect_rate: 85.0,
                },
            ),
            (
                "Conversion".to_string(),
                CampaignPreset {
                    buying_unit: BuyingUnit::Cpc,
                    cpc: Some(3.5),
                    cpm: None,
                    ctr: 3.0,
                    conversion_rate: 5.0,
                    connect_rate: 90.0,
                },
            ),
            (
                "Retargeting".to_string(),
                CampaignPreset {
                    buying_unit: BuyingUnit::Cpm,
                    cpc: None,
                    cpm: Some(22.0),
                    ctr: 2.2,
                    conversion_rate: 4.0,
                    connect_rate: 85.0,
                },
            ),
        ]);

        let channel_formats = HashMap::from([
            (
                "Google Ads".to_string(),
                to_strings(&["Search", "PMax", "Display", "YouTube", "Demand Gen"]),
            ),
            (
                "Meta Ads".to_string(),
                to_strings(&[
                    "Darkpost",
                    "Faceleads",
                    "Feed",
                    "Stories/Reels",
                    "Feed/Stories",
                    "Carousel",
                    "Video Views",
                    "Lead Ad",
                ]),
            ),
            (
                "LinkedIn Ads".to_string(),
                to_strings(&[
                    "Sponsored Content",
                    "Sponsored Messaging",
                    "Lead Gen Forms",
                    "Dynamic Ads",
                    "Text Ads",
                ]),
            ),
            (
                "TikTok Ads".to_string(),
                to_strings(&[
                    "In-Feed Ads",
                    "TopView",
                    "Branded Hashtag Challenge",
                    "Branded Effects",
                ]),
            ),
            (
                "Microsoft Ads".to_string(),
                to_strings(&["Search", "Audience Network"]),
            ),
            (
                "Pinterest Ads".to_string(),
                to_strings(&[
                    "Static Pin",
                    "Video Pin",
                    "Carousel Pin",
                    "Shopping Pin",
                    "Idea Pin",
                ]),
            ),
            (
                "X Ads".to_string(),
                to_strings(&["Promoted Ads", "Follower Ads", "X Amplify", "X Live"]),
            ),
        ]);

        Self {
            frequency,
            default_frequency: 3.0,
            presets,
            channel_formats,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
