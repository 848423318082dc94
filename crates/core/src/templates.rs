//! Built-in plan templates. Template campaigns are passed through the metrics
//! engine at construction so a freshly created plan is already fully derived.

use crate::error::{PlannerError, PlannerResult};
use crate::metrics::MetricsEngine;
use crate::months::{month_key, Language};
use crate::plan::PlanData;
use crate::sources::PlanSource;
use crate::types::{BuyingUnit, Campaign};
use chrono::{Datelike, Utc};
use uuid::Uuid;

fn new_plan_id() -> String {
    format!("plan_{}", Uuid::new_v4())
}

fn new_campaign_id() -> String {
    format!("c_{}", Uuid::new_v4())
}

/// An empty plan with nothing but identity and a default investment.
pub fn blank_plan(user_id: &str, name: &str, total_investment: f64) -> PlanData {
    let mut plan = PlanData::new(new_plan_id(), user_id, name);
    plan.total_investment = total_investment;
    plan
}

/// A two-month product-launch plan used as the "start from template" option:
/// top-of-funnel traffic and awareness in month one, lead capture and
/// conversion in month two.
pub fn launch_template(engine: &MetricsEngine, language: Language, user_id: &str) -> PlanData {
    let year = Utc::now().year();
    let mut plan = PlanData::new(new_plan_id(), user_id, "Launch Plan (Template)");
    plan.objective = "Launch the new skincare line and generate the first 100 sales.".to_string();
    plan.target_audience =
        "Women aged 25-45 interested in beauty, wellness and sustainable products.".to_string();
    plan.location = "Brazil".to_string();
    plan.total_investment = 50_000.0;
    plan.logo_url = "https://placehold.co/400x300/f472b6/ffffff?text=BeautyCo".to_string();

    let month_one = month_key(language, year, 0);
    let month_two = month_key(language, year, 1);

    plan.upsert_campaign(
        &month_one,
        engine.recalculate(&Campaign {
            id: new_campaign_id(),
            campaign_type: Some("Traffic".to_string()),
            funnel_stage: Some("Top".to_string()),
            channel: Some("Google Ads".to_string()),
            format: Some("Search".to_string()),
            objective: Some("Attract qualified visitors to the new site.".to_string()),
            kpi_description: Some("Clicks, CPC".to_string()),
            target_audience: Some("People searching for sustainable skincare.".to_string()),
            buying_unit: Some(BuyingUnit::Cpc),
            budget: Some(5_000.0),
            cpc: Some(1.5),
            ctr: Some(2.5),
            conversion_rate: Some(1.0),
            connect_rate: Some(80.0),
            ..Campaign::default()
        }),
    );
    plan.upsert_campaign(
        &month_one,
        engine.recalculate(&Campaign {
            id: new_campaign_id(),
            campaign_type: Some("Awareness".to_string()),
            funnel_stage: Some("Top".to_string()),
            channel: Some("Meta Ads".to_string()),
            format: Some("Feed/Stories".to_string()),
            objective: Some("Build recognition for the new brand.".to_string()),
            kpi_description: Some("Reach, Impressions, CPM".to_string()),
            target_audience: Some("Women 25-45 on Instagram/Facebook.".to_string()),
            buying_unit: Some(BuyingUnit::Cpm),
            budget: Some(7_500.0),
            cpm: Some(18.0),
            ctr: Some(1.2),
            conversion_rate: Some(0.2),
            connect_rate: Some(60.0),
            ..Campaign::default()
        }),
    );
    plan.upsert_campaign(
        &month_two,
        engine.recalculate(&Campaign {
            id: new_campaign_id(),
            campaign_type: Some("Lead Generation".to_string()),
            funnel_stage: Some("Middle".to_string()),
            channel: Some("Meta Ads".to_string()),
            format: Some("Lead Ad".to_string()),
            objective: Some("Capture newsletter leads.".to_string()),
            kpi_description: Some("Leads, CPL".to_string()),
            target_audience: Some("Audience that engaged with top-funnel campaigns.".to_string()),
            buying_unit: Some(BuyingUnit::Cpc),
            budget: Some(6_000.0),
            cpc: Some(2.0),
            ctr: Some(1.8),
            conversion_rate: Some(7.0),
            connect_rate: Some(85.0),
            ..Campaign::default()
        }),
    );
    plan.upsert_campaign(
        &month_two,
        engine.recalculate(&Campaign {
            id: new_campaign_id(),
            campaign_type: Some("Conversion".to_string()),
            funnel_stage: Some("Bottom".to_string()),
            channel: Some("Google Ads".to_string()),
            format: Some("PMax".to_string()),
            objective: Some("Drive product sales.".to_string()),
            kpi_description: Some("Sales, CPA".to_string()),
            target_audience: Some("Retargeting of site visitors.".to_string()),
            buying_unit: Some(BuyingUnit::Cpc),
            budget: Some(10_000.0),
            cpc: Some(3.5),
            ctr: Some(3.0),
            conversion_rate: Some(5.0),
            connect_rate: Some(90.0),
            ..Campaign::default()
        }),
    );

    plan
}

/// Deterministic built-in [`PlanSource`]: returns the launch template for any
/// non-empty briefing. Stands in for the remote AI generator during
/// development and tests, including its empty-prompt rejection.
pub struct TemplatePlanSource {
    engine: MetricsEngine,
    language: Language,
}

impl TemplatePlanSource {
    pub fn new(engine: MetricsEngine, language: Language) -> Self {
        Self { engine, language }
    }
}

impl PlanSource for TemplatePlanSource {
    fn generate_plan(&self, user_id: &str, prompt: &str) -> PlannerResult<PlanData> {
        if prompt.trim().is_empty() {
            return Err(PlannerError::Generation(
                "briefing prompt is required".to_string(),
            ));
        }
        Ok(launch_template(&self.engine, self.language, user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::LookupTables;

    #[test]
    fn test_blank_plan_has_no_months() {
        let plan = blank_plan("user_1", "New Blank Plan", 10_000.0);
        assert!(plan.months.is_empty());
        assert_eq!(plan.total_investment, 10_000.0);
        assert_eq!(plan.user_id.as_deref(), Some("user_1"));
    }

    #[test]
    fn test_launch_template_is_fully_derived() {
        let engine = MetricsEngine::new(LookupTables::default());
        let plan = launch_template(&engine, Language::PtBr, "user_1");

        assert_eq!(plan.months.len(), 2);
        assert_eq!(plan.all_campaigns().count(), 4);
        for campaign in plan.all_campaigns() {
            // Every numeric field is populated after the engine pass.
            assert!(campaign.impressions.is_some());
            assert!(campaign.reach.is_some());
            assert!(campaign.daily_budget.is_some());
            assert!(campaign.budget.unwrap() > 0.0);
            assert!(campaign.clicks.unwrap() > 0.0);
        }
    }

    #[test]
    fn test_launch_template_months_follow_language() {
        let engine = MetricsEngine::new(LookupTables::default());
        let plan = launch_template(&engine, Language::EnUs, "user_1");
        let keys = plan.month_keys_sorted(Language::EnUs);
        assert!(keys[0].ends_with("-January"));
        assert!(keys[1].ends_with("-February"));
    }

    #[test]
    fn test_template_source_returns_a_plan() {
        let source = TemplatePlanSource::new(
            MetricsEngine::new(LookupTables::default()),
            Language::PtBr,
        );
        let plan = source.generate_plan("user_1", "anything").unwrap();
        assert_eq!(plan.user_id.as_deref(), Some("user_1"));
        assert!(!plan.months.is_empty());
    }

    #[test]
    fn test_template_source_rejects_empty_prompt() {
        let source = TemplatePlanSource::new(
            MetricsEngine::new(LookupTables::default()),
            Language::PtBr,
        );
        let err = source.generate_plan("user_1", "   ").unwrap_err();
        assert!(matches!(err, PlannerError::Generation(_)));
    }
}
