//! Plan and month roll-ups.
//!
//! Counters are summed from the stored per-campaign values; rates are derived
//! from the sums. Averaging per-campaign rates would bias the result toward
//! campaigns with small denominators.

use crate::plan::PlanData;
use crate::types::{Campaign, PlanSummary, SummaryData};

/// Average days per calendar month, shared with the metrics engine.
const DAYS_PER_MONTH: f64 = 30.4;

fn num(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Reduce a set of campaigns into an aggregate.
///
/// `month_count` scales the daily-budget estimate (1 for a single-month
/// summary). The channel breakdown is only built when `with_channels` is set;
/// campaigns without a channel always contribute to the totals but never to
/// the breakdown.
pub fn summarize_campaigns<'a>(
    campaigns: impl IntoIterator<Item = &'a Campaign>,
    month_count: usize,
    with_channels: bool,
) -> SummaryData {
    let mut summary = SummaryData::default();

    for campaign in campaigns {
        let budget = num(campaign.budget);
        summary.budget += budget;
        summary.impressions += num(campaign.impressions);
        summary.reach += num(campaign.reach);
        summary.clicks += num(campaign.clicks);
        summary.conversions += num(campaign.conversions);

        if with_channels {
            if let Some(channel) = campaign.channel.as_deref().filter(|c| !c.is_empty()) {
                *summary.channel_budgets.entry(channel.to_string()).or_insert(0.0) += budget;
            }
        }
    }

    summary.ctr = if summary.impressions > 0.0 {
        (summary.clicks / summary.impressions) * 100.0
    } else {
        0.0
    };
    summary.cpc = if summary.clicks > 0.0 {
        summary.budget / summary.clicks
    } else {
        0.0
    };
    summary.cpm = if summary.impressions > 0.0 {
        (summary.budget / summary.impressions) * 1000.0
    } else {
        0.0
    };
    summary.cpa = if summary.conversions > 0.0 {
        summary.budget / summary.conversions
    } else {
        0.0
    };
    summary.conversion_rate = if summary.clicks > 0.0 {
        (summary.conversions / summary.clicks) * 100.0
    } else {
        0.0
    };
    summary.daily_budget = if month_count > 0 {
        summary.budget / (month_count as f64 * DAYS_PER_MONTH)
    } else {
        0.0
    };

    summary
}

/// Plan-wide totals plus one summary per month present in the plan.
pub fn summarize_plan(plan: &PlanData) -> PlanSummary {
    let month_count = plan.months.len();
    let totals = summarize_campaigns(plan.all_campaigns(), month_count, true);

    let monthly = plan
        .months
        .iter()
        .map(|(month, campaigns)| (month.clone(), summarize_campaigns(campaigns, 1, false)))
        .collect();

    PlanSummary { totals, monthly }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuyingUnit;

    fn campaign(id: &str, channel: Option<&str>, budget: f64) -> Campaign {
        Campaign {
            id: id.to_string(),
            channel: channel.map(|c| c.to_string()),
            buying_unit: Some(BuyingUnit::Cpc),
            budget: Some(budget),
            ..Campaign::default()
        }
    }

    fn stored(id: &str, channel: Option<&str>, budget: f64, impressions: f64, clicks: f64, conversions: f64) -> Campaign {
        let mut c = campaign(id, channel, budget);
        c.impressions = Some(impressions);
        c.clicks = Some(clicks);
        c.conversions = Some(conversions);
        c.reach = Some(impressions / 2.0);
        c
    }

    #[test]
    fn test_totals_are_exact_sums_of_stored_values() {
        let mut plan = PlanData::new("plan_1", "user_1", "Sums");
        plan.upsert_campaign("2025-Janeiro", stored("c_1", Some("Google Ads"), 1_000.0, 50_000.0, 1_250.0, 25.0));
        plan.upsert_campaign("2025-Janeiro", stored("c_2", Some("Meta Ads"), 2_500.0, 125_000.0, 1_500.0, 3.0));
        plan.upsert_campaign("2025-Fevereiro", stored("c_3", Some("Google Ads"), 500.0, 10_000.0, 300.0, 12.0));

        let summary = summarize_plan(&plan);
        assert_eq!(summary.totals.budget, 4_000.0);
        assert_eq!(summary.totals.impressions, 185_000.0);
        assert_eq!(summary.totals.clicks, 3_050.0);
        assert_eq!(summary.totals.conversions, 40.0);
        assert_eq!(summary.totals.reach, 92_500.0);
    }

    #[test]
    fn test_rates_derive_from_sums_not_campaign_rates() {
        // One huge low-CTR campaign and one tiny high-CTR campaign: the
        // blended CTR must track volume, not the average of 1% and 10%.
        let big = stored("c_1", None, 0.0, 100_000.0, 1_000.0, 0.0);
        let small = stored("c_2", None, 0.0, 1_000.0, 100.0, 0.0);

        let summary = summarize_campaigns([&big, &small], 1, false);
        let expected = (1_100.0 / 101_000.0) * 100.0;
        assert!((summary.ctr - expected).abs() < 1e-12);
        assert!(summary.ctr < 2.0);
    }

    #[test]
    fn test_channel_breakdown_excludes_unattributed_budget() {
        let attributed = campaign("c_1", Some("Google Ads"), 600.0);
        let also_attributed = campaign("c_2", Some("Google Ads"), 400.0);
        let unattributed = campaign("c_3", None, 250.0);

        let summary = summarize_campaigns([&attributed, &also_attributed, &unattributed], 1, true);
        assert_eq!(summary.budget, 1_250.0);
        assert_eq!(summary.channel_budgets["Google Ads"], 1_000.0);

        let channel_total: f64 = summary.channel_budgets.values().sum();
        assert!(channel_total <= summary.budget);
        assert_eq!(channel_total, 1_000.0);
    }

    #[test]
    fn test_channel_breakdown_complete_when_all_attributed() {
        let a = campaign("c_1", Some("Meta Ads"), 300.0);
        let b = campaign("c_2", Some("X Ads"), 700.0);

        let summary = summarize_campaigns([&a, &b], 1, true);
        let channel_total: f64 = summary.channel_budgets.values().sum();
        assert_eq!(channel_total, summary.budget);
    }

    #[test]
    fn test_empty_plan_summary_is_all_zero() {
        let plan = PlanData::new("plan_1", "user_1", "Empty");
        let summary = summarize_plan(&plan);

        assert_eq!(summary.totals.budget, 0.0);
        assert_eq!(summary.totals.ctr, 0.0);
        assert_eq!(summary.totals.cpa, 0.0);
        assert_eq!(summary.totals.daily_budget, 0.0);
        assert!(summary.monthly.is_empty());
    }

    #[test]
    fn test_plan_daily_budget_spans_all_months() {
        let mut plan = PlanData::new("plan_1", "user_1", "Daily");
        plan.upsert_campaign("2025-Janeiro", campaign("c_1", None, 3_040.0));
        plan.upsert_campaign("2025-Fevereiro", campaign("c_2", None, 3_040.0));

        let summary = summarize_plan(&plan);
        // 6080 over two months of 30.4 days.
        assert!((summary.totals.daily_budget - 100.0).abs() < 1e-9);

        let january = &summary.monthly["2025-Janeiro"];
        assert!((january.daily_budget - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_summaries_restricted_to_their_bucket() {
        let mut plan = PlanData::new("plan_1", "user_1", "Months");
        plan.upsert_campaign("2025-Janeiro", stored("c_1", Some("Google Ads"), 100.0, 1_000.0, 20.0, 1.0));
        plan.upsert_campaign("2025-Fevereiro", stored("c_2", Some("Meta Ads"), 900.0, 9_000.0, 90.0, 9.0));

        let summary = summarize_plan(&plan);
        assert_eq!(summary.monthly.len(), 2);

        let january = &summary.monthly["2025-Janeiro"];
        assert_eq!(january.budget, 100.0);
        assert_eq!(january.clicks, 20.0);
        assert_eq!(january.ctr, 2.0);
        assert_eq!(january.conversion_rate, 5.0);
        // Channel breakdown is plan-level only.
        assert!(january.channel_budgets.is_empty());
    }
}
