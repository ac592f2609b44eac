/// A reference persona used as an alignment signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinkerWeight {
    /// Key used in a content item's `indicators`
    pub key: &'static str,
    pub label: &'static str,
    pub themes: &'static str,
    pub weight: f64,
}

/// Thinker weights; they sum to 1.0
pub const THINKER_WEIGHTS: [ThinkerWeight; 5] = [
    ThinkerWeight {
        key: "jobs",
        label: "Steve Jobs",
        themes: "Craft, simplicity, vision, saying no",
        weight: 0.40,
    },
    ThinkerWeight {
        key: "ceoFounder",
        label: "CEOs/Founders",
        themes: "Operators with depth",
        weight: 0.25,
    },
    ThinkerWeight {
        key: "peterson",
        label: "Jordan Peterson",
        themes: "Responsibility, meaning, confronting chaos",
        weight: 0.15,
    },
    ThinkerWeight {
        key: "aboff",
        label: "Virgil Abloh",
        themes: "Cross-disciplinary curiosity, art",
        weight: 0.10,
    },
    ThinkerWeight {
        key: "west",
        label: "Kanye West",
        themes: "Creative audacity, rejecting limits",
        weight: 0.10,
    },
];

/// Weights of the four score components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub thinker_match: f64,
    pub depth_score: f64,
    pub production_quality: f64,
    pub format_score: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.thinker_match + self.depth_score + self.production_quality + self.format_score
    }
}

pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    thinker_match: 0.35,
    depth_score: 0.30,
    production_quality: 0.20,
    format_score: 0.15,
};

/// Indicator score for a thinker with one piece of evidence is BASE + PER_EVIDENCE
pub const INDICATOR_BASE_SCORE: f64 = 60.0;
pub const INDICATOR_SCORE_PER_EVIDENCE: f64 = 10.0;
pub const INDICATOR_SCORE_CAP: f64 = 100.0;

/// Thinker match when an item evidences none of the weighted thinkers
pub const NEUTRAL_THINKER_MATCH: f64 = 50.0;

/// Subtracted from the weighted sum once per anti-indicator
pub const ANTI_INDICATOR_PENALTY: f64 = 30.0;

pub fn thinker_weight_sum(weights: &[ThinkerWeight]) -> f64 {
    weights.iter().map(|t| t.weight).sum()
}
