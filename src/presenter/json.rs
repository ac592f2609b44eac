use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::ScoredItem,
};

use super::Tier;

/// Machine-readable view of one recommendation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView<'a> {
    #[serde(flatten)]
    pub scored: &'a ScoredItem,
    pub tier: Tier,
}

impl<'a> From<&'a ScoredItem> for RecommendationView<'a> {
    fn from(scored: &'a ScoredItem) -> Self {
        Self {
            scored,
            tier: Tier::from_score(scored.calculated_score),
        }
    }
}

/// Renders ranked results as a pretty-printed JSON array
pub fn render_json(results: &[ScoredItem]) -> AppResult<String> {
    let views: Vec<RecommendationView> = results.iter().map(RecommendationView::from).collect();
    serde_json::to_string_pretty(&views).map_err(|e| AppError::Render(e.to_string()))
}
