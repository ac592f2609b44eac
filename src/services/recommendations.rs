use crate::models::{ContentItem, FilterCriteria, ScoredItem};

use super::{filtering::apply_filters, scoring::Scorer};

/// Score threshold of the default "top picks" view
pub const TOP_PICKS_MIN_SCORE: i64 = 85;

/// Generates ranked recommendations from a fixed catalog
///
/// Every run scores the whole catalog afresh, narrows it with the supplied
/// criteria, then ranks by score. The catalog itself is never modified.
pub struct Recommender<'a> {
    catalog: &'a [ContentItem],
    scorer: Scorer<'a>,
}

impl<'a> Recommender<'a> {
    /// Creates a recommender using the reference weight tables
    pub fn new(catalog: &'a [ContentItem]) -> Self {
        Self::with_scorer(catalog, Scorer::default())
    }

    pub fn with_scorer(catalog: &'a [ContentItem], scorer: Scorer<'a>) -> Self {
        Self { catalog, scorer }
    }

    /// Scores every catalog item, in catalog order
    pub fn score_all(&self) -> Vec<ScoredItem> {
        self.catalog
            .iter()
            .map(|item| ScoredItem {
                calculated_score: self.scorer.score(item),
                item: item.clone(),
            })
            .collect()
    }

    pub fn recommend(&self, criteria: &FilterCriteria) -> Vec<ScoredItem> {
        let scored = self.score_all();
        tracing::debug!(scored = scored.len(), "Scored catalog");

        let filtered = apply_filters(scored, criteria);
        tracing::debug!(
            remaining = filtered.len(),
            criteria = ?criteria,
            "Applied filters"
        );

        let ranked = rank(filtered);
        if ranked.is_empty() {
            tracing::info!("No content matches the given criteria");
        }
        ranked
    }

    /// Recommendations for the default view
    pub fn top_picks(&self) -> Vec<ScoredItem> {
        self.recommend(&FilterCriteria::min_score(TOP_PICKS_MIN_SCORE))
    }
}

/// Orders items by descending score; ties keep their incoming order
pub fn rank(mut items: Vec<ScoredItem>) -> Vec<ScoredItem> {
    // sort_by is stable
    items.sort_by(|a, b| b.calculated_score.cmp(&a.calculated_score));
    items
}
