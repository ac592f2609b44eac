pub mod filtering;
pub mod recommendations;
pub mod scoring;
pub mod weights;

pub use filtering::apply_filters;
pub use recommendations::{rank, Recommender, TOP_PICKS_MIN_SCORE};
pub use scoring::{format_score, ScoreBreakdown, Scorer};
