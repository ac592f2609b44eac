use crate::models::{Branch, ContentItem, Indicators};

use super::weights::{
    ScoreWeights, ThinkerWeight, ANTI_INDICATOR_PENALTY, INDICATOR_BASE_SCORE,
    INDICATOR_SCORE_CAP, INDICATOR_SCORE_PER_EVIDENCE, NEUTRAL_THINKER_MATCH, SCORE_WEIGHTS,
    THINKER_WEIGHTS,
};

/// Intermediate values behind a recommendation score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub thinker_match: f64,
    pub depth_score: f64,
    pub production_quality: f64,
    pub format_score: f64,
    pub penalty: f64,
    /// Weighted sum minus penalty, before rounding
    pub raw: f64,
}

impl ScoreBreakdown {
    /// Final score: rounded half-up, floored at zero
    pub fn score(&self) -> u32 {
        let rounded = (self.raw + 0.5).floor();
        if rounded <= 0.0 {
            0
        } else {
            rounded as u32
        }
    }
}

/// Maps a content item to a recommendation score in [0, 100]
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    thinkers: &'a [ThinkerWeight],
    weights: ScoreWeights,
}

impl Default for Scorer<'static> {
    fn default() -> Self {
        Self::new(&THINKER_WEIGHTS, SCORE_WEIGHTS)
    }
}

impl<'a> Scorer<'a> {
    /// Creates a scorer over the given weight tables
    pub fn new(thinkers: &'a [ThinkerWeight], weights: ScoreWeights) -> Self {
        Self { thinkers, weights }
    }

    /// Weighted average of indicator scores over the thinkers the item
    /// actually evidences. Thinkers without evidence are left out of the
    /// denominator, so sparse coverage is not penalized.
    pub fn thinker_match(&self, indicators: &Indicators) -> f64 {
        let mut score = 0.0;
        let mut total_weight = 0.0;

        for thinker in self.thinkers {
            let evidence = indicators.evidence(thinker.key).len();
            if evidence == 0 {
                continue;
            }
            let indicator_score = (INDICATOR_BASE_SCORE
                + INDICATOR_SCORE_PER_EVIDENCE * evidence as f64)
                .min(INDICATOR_SCORE_CAP);
            score += indicator_score * thinker.weight;
            total_weight += thinker.weight;
        }

        if total_weight > 0.0 {
            score / total_weight
        } else {
            NEUTRAL_THINKER_MATCH
        }
    }

    pub fn breakdown(&self, item: &ContentItem) -> ScoreBreakdown {
        let thinker_match = self.thinker_match(&item.indicators);
        let format_score = format_score(item.duration, &item.branch);
        let depth_score = item.scores.depth_score;
        let production_quality = item.scores.production_quality;
        let penalty = ANTI_INDICATOR_PENALTY * item.indicators.anti_indicators.len() as f64;

        let weighted = thinker_match * self.weights.thinker_match
            + depth_score * self.weights.depth_score
            + production_quality * self.weights.production_quality
            + format_score * self.weights.format_score;

        ScoreBreakdown {
            thinker_match,
            depth_score,
            production_quality,
            format_score,
            penalty,
            raw: weighted - penalty,
        }
    }

    pub fn score(&self, item: &ContentItem) -> u32 {
        self.breakdown(item).score()
    }
}

/// Duration-based format score
///
/// Empire content steps down past 30 minutes; everything else only takes a
/// mild hit past an hour.
pub fn format_score(duration: u32, branch: &Branch) -> f64 {
    match branch {
        Branch::Empire => match duration {
            0..=30 => 100.0,
            31..=45 => 75.0,
            46..=60 => 50.0,
            _ => 25.0,
        },
        _ => {
            if duration <= 60 {
                95.0
            } else {
                85.0
            }
        }
    }
}
