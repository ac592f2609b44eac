//! Rendering of ranked recommendations for the console

use serde::Serialize;

pub mod json;
pub mod text;

pub use json::{render_json, RecommendationView};
pub use text::{format_duration, render_algorithm, render_recommendations, render_top_picks_heading};

/// Qualitative band of a recommendation score. Labels only, never a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    MustWatch,
    HighlyRecommended,
    WorthYourTime,
    BackgroundWorthy,
    BelowThreshold,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::MustWatch,
        Tier::HighlyRecommended,
        Tier::WorthYourTime,
        Tier::BackgroundWorthy,
        Tier::BelowThreshold,
    ];

    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Tier::MustWatch,
            80..=89 => Tier::HighlyRecommended,
            70..=79 => Tier::WorthYourTime,
            60..=69 => Tier::BackgroundWorthy,
            _ => Tier::BelowThreshold,
        }
    }

    /// Score range as shown in the algorithm explanation
    pub fn range(&self) -> &'static str {
        match self {
            Tier::MustWatch => "90-100",
            Tier::HighlyRecommended => "80-89",
            Tier::WorthYourTime => "70-79",
            Tier::BackgroundWorthy => "60-69",
            Tier::BelowThreshold => "<60",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::MustWatch => "Must watch",
            Tier::HighlyRecommended => "Highly recommended",
            Tier::WorthYourTime => "Worth your time",
            Tier::BackgroundWorthy => "Background worthy",
            Tier::BelowThreshold => "Below threshold",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::MustWatch => "exceptional alignment",
            Tier::HighlyRecommended => "strong match",
            Tier::WorthYourTime => "solid content",
            Tier::BackgroundWorthy => "if you have time",
            Tier::BelowThreshold => "rarely worth it",
        }
    }
}

/// Leading marker for a result line
pub fn score_marker(score: u32) -> &'static str {
    match score {
        90.. => "🌟",
        80..=89 => "✨",
        70..=79 => "👍",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(100), Tier::MustWatch);
        assert_eq!(Tier::from_score(90), Tier::MustWatch);
        assert_eq!(Tier::from_score(89), Tier::HighlyRecommended);
        assert_eq!(Tier::from_score(80), Tier::HighlyRecommended);
        assert_eq!(Tier::from_score(79), Tier::WorthYourTime);
        assert_eq!(Tier::from_score(60), Tier::BackgroundWorthy);
        assert_eq!(Tier::from_score(59), Tier::BelowThreshold);
        assert_eq!(Tier::from_score(0), Tier::BelowThreshold);
    }

    #[test]
    fn test_score_markers() {
        assert_eq!(score_marker(95), "🌟");
        assert_eq!(score_marker(85), "✨");
        assert_eq!(score_marker(70), "👍");
        assert_eq!(score_marker(69), "•");
    }

    #[test]
    fn test_tier_serialization() {
        let json = serde_json::to_string(&Tier::HighlyRecommended).unwrap();
        assert_eq!(json, "\"highly_recommended\"");
    }
}
