pub mod content;
pub mod criteria;

pub use content::{
    Branch, ContentDatabase, ContentItem, Indicators, ScoredItem, SubScores, ANTI_INDICATORS_KEY,
    EMPIRE_BRANCH_ID, MAIN_BRANCH_ID,
};
pub use criteria::{FilterCriteria, Threshold};
