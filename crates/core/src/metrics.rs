//! Campaign metrics inference.
//!
//! Given a partially-specified campaign, derive the missing quantities into a
//! mutually consistent set. The derivation is a fixed, priority-ordered chain
//! of branches rather than a simultaneous equation solve: when inputs are
//! inconsistent the earlier branch wins, which keeps the output deterministic
//! and reproducible.

use crate::tables::LookupTables;
use crate::types::{BuyingUnit, Campaign};
use tracing::debug;

/// Average days per calendar month, used for the daily-budget estimate.
const DAYS_PER_MONTH: f64 = 30.4;

fn num(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Pure, total metrics derivation over in-memory campaigns. Holds the lookup
/// tables it needs (audience frequency, type presets) as plain data.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    tables: LookupTables,
}

impl MetricsEngine {
    pub fn new(tables: LookupTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Create a new campaign of the given type, seeded from the type's metric
    /// preset and passed through one derivation pass.
    pub fn seed_campaign(&self, id: impl Into<String>, campaign_type: &str) -> Campaign {
        let mut campaign = Campaign::new(id);
        debug!(campaign_id = %campaign.id, campaign_type, "Seeding campaign from preset");
        campaign.campaign_type = Some(campaign_type.to_string());
        if let Some(preset) = self.tables.preset_for(campaign_type) {
            preset.apply(&mut campaign);
        }
        self.recalculate(&campaign)
    }

    /// Fill in every derivable metric. Absent inputs count as 0; every
    /// division is zero-guarded, so this never fails. Applying the result a
    /// second time yields the same output.
    pub fn recalculate(&self, campaign: &Campaign) -> Campaign {
        let mut out = campaign.clone();

        let mut budget = num(campaign.budget);
        let ctr = num(campaign.ctr) / 100.0;
        let conversion_rate = num(campaign.conversion_rate) / 100.0;
        let connect_rate = num(campaign.connect_rate) / 100.0;
        let mut cpc = num(campaign.cpc);
        let mut cpm = num(campaign.cpm);
        let mut impressions = num(campaign.impressions);
        let mut clicks = num(campaign.clicks);

        // Cross-derive the missing unit price when CTR links the two. When
        // both are already set they are left alone; no reconciliation.
        if cpc > 0.0 && ctr > 0.0 && cpm == 0.0 {
            cpm = cpc * ctr * 1000.0;
        } else if cpm > 0.0 && ctr > 0.0 && cpc == 0.0 {
            cpc = (cpm / 1000.0) / ctr;
        }

        if budget > 0.0 {
            // Budget drives volume. The declared buying unit picks the billing
            // path; without a usable unit price, fall back to whichever unit
            // price is available (CPM preferred).
            if campaign.buying_unit == Some(BuyingUnit::Cpm) && cpm > 0.0 {
                impressions = (budget / cpm) * 1000.0;
                clicks = impressions * ctr;
                if clicks > 0.0 {
                    cpc = budget / clicks;
                }
            } else if campaign.buying_unit == Some(BuyingUnit::Cpc) && cpc > 0.0 {
                clicks = budget / cpc;
                if ctr > 0.0 {
                    impressions = clicks / ctr;
                    cpm = (budget / impressions) * 1000.0;
                }
            } else if cpm > 0.0 {
                impressions = (budget / cpm) * 1000.0;
                clicks = impressions * ctr;
            } else if cpc > 0.0 {
                clicks = budget / cpc;
                if ctr > 0.0 {
                    impressions = clicks / ctr;
                }
            }
        } else if impressions > 0.0 {
            // No budget: derive clicks from delivered impressions and back-fill
            // the spend from the unit price.
            clicks = impressions * ctr;
            if cpm > 0.0 {
                budget = (impressions / 1000.0) * cpm;
            } else if cpc > 0.0 {
                budget = clicks * cpc;
            }
        } else if clicks > 0.0 {
            if ctr > 0.0 {
                impressions = clicks / ctr;
            }
            if cpc > 0.0 {
                budget = clicks * cpc;
            } else if cpm > 0.0 && impressions > 0.0 {
                budget = (impressions / 1000.0) * cpm;
            }
        }

        let conversions = clicks * conversion_rate;
        let cpa = if conversions > 0.0 {
            budget / conversions
        } else {
            0.0
        };
        let visits = clicks * connect_rate;
        let daily_budget = budget / DAYS_PER_MONTH;

        let frequency = self.tables.frequency_for(campaign.campaign_type.as_deref());
        let reach = if impressions > 0.0 && frequency > 0.0 {
            impressions / frequency
        } else {
            0.0
        };

        out.budget = Some(budget);
        out.cpc = Some(cpc);
        out.cpm = Some(cpm);
        out.cpa = Some(cpa);
        out.daily_budget = Some(daily_budget);
        out.ctr = Some(ctr * 100.0);
        out.conversion_rate = Some(conversion_rate * 100.0);
        out.connect_rate = Some(connect_rate * 100.0);
        out.impressions = Some(impressions.round());
        out.clicks = Some(clicks.round());
        out.conversions = Some(conversions.round());
        out.reach = Some(reach.round());
        out.visits = Some(visits.round());
        out
    }
}
