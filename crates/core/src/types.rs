use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One line-item of ad spend for one channel/format in one month.
///
/// Every numeric field is optional: `None` means the value was never provided
/// by the user, a template, or a generation source. The metrics engine treats
/// `None` and `Some(0.0)` identically during derivation and returns a campaign
/// with every numeric field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funnel_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// Free-text KPI description, e.g. "Clicks, CPC".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    /// The metric basis on which spend is billed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_unit: Option<BuyingUnit>,

    // Monetary fields (full precision, never rounded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpa: Option<f64>,

    // Volume fields (rounded to whole counts after derivation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impressions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visits: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversions: Option<f64>,

    // Rate fields, stored on the 0-100 percentage scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_rate: Option<f64>,
}

impl Campaign {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Billing basis for a campaign's media buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyingUnit {
    #[serde(rename = "CPC")]
    Cpc,
    #[serde(rename = "CPM")]
    Cpm,
    #[serde(rename = "CPV")]
    Cpv,
}

/// Aggregate over a set of campaigns. Counter fields are raw sums of the
/// stored per-campaign values; rate fields are derived from those sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub budget: f64,
    pub impressions: f64,
    pub reach: f64,
    pub clicks: f64,
    pub conversions: f64,
    /// channel name -> summed budget. Campaigns without a channel are counted
    /// in the totals but excluded here.
    pub channel_budgets: HashMap<String, f64>,
    pub ctr: f64,
    pub cpc: f64,
    pub cpm: f64,
    pub cpa: f64,
    pub conversion_rate: f64,
    pub daily_budget: f64,
}

/// month-key -> per-month aggregate.
pub type MonthlySummary = HashMap<String, SummaryData>;

/// Plan-wide totals plus the per-month breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub totals: SummaryData,
    pub monthly: MonthlySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_json_round_trip_uses_camel_case() {
        let campaign = Campaign {
            id: "c_1".to_string(),
            campaign_type: Some("Traffic".to_string()),
            buying_unit: Some(BuyingUnit::Cpc),
            budget: Some(100.0),
            conversion_rate: Some(5.0),
            ..Campaign::default()
        };

        let json = serde_json::to_value(&campaign).unwrap();
        assert_eq!(json["campaignType"], "Traffic");
        assert_eq!(json["buyingUnit"], "CPC");
        assert_eq!(json["conversionRate"], 5.0);
        // Unset fields are omitted entirely, not serialized as null.
        assert!(json.get("cpm").is_none());

        let back: Campaign = serde_json::from_value(json).unwrap();
        assert_eq!(back, campaign);
    }

    #[test]
    fn test_buying_unit_wire_names() {
        assert_eq!(serde_json::to_string(&BuyingUnit::Cpm).unwrap(), "\"CPM\"");
        let parsed: BuyingUnit = serde_json::from_str("\"CPV\"").unwrap();
        assert_eq!(parsed, BuyingUnit::Cpv);
    }
}
