//! Seams for the out-of-scope content generators (AI plan/keyword/copy
//! suggestions). The core only requires that whatever produces these values
//! returns them in the same shapes it already consumes.

use crate::error::PlannerResult;
use crate::plan::{CreativeTextGroup, KeywordSuggestion, PlanData};

/// Produces a whole plan from a free-text briefing.
pub trait PlanSource {
    fn generate_plan(&self, user_id: &str, prompt: &str) -> PlannerResult<PlanData>;
}

/// Suggests search keywords for a theme.
pub trait KeywordSource {
    fn suggest_keywords(&self, theme: &str) -> PlannerResult<Vec<KeywordSuggestion>>;
}

/// Suggests ad copy variants for a channel.
pub trait CreativeSource {
    fn suggest_creatives(&self, channel: &str, context: &str)
        -> PlannerResult<Vec<CreativeTextGroup>>;
}
