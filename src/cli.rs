use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::AppResult,
    models::{Branch, FilterCriteria, Threshold},
    presenter,
    services::{Recommender, TOP_PICKS_MIN_SCORE},
    store::ContentStore,
};

#[derive(Parser, Debug)]
#[command(name = "recommender", version)]
#[command(about = "Scores and filters a catalog of podcasts, talks and interviews")]
#[command(after_help = "Examples:
  recommender --branch empire --max-duration 30
  recommender --thinker jobs --min-score 85
  recommender --category podcast")]
pub struct Cli {
    /// List all content in the database (other filters still apply)
    #[arg(long)]
    pub list_all: bool,

    /// Filter by type: podcast, interview, speech, lecture, documentary
    #[arg(long, value_name = "TYPE")]
    pub category: Option<String>,

    /// Filter by branch: main, empire
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Filter by thinker: jobs, ceoFounder, peterson, aboff, west
    #[arg(long, value_name = "NAME")]
    pub thinker: Option<String>,

    /// Maximum duration in minutes
    #[arg(long, value_name = "MIN", allow_hyphen_values = true)]
    pub max_duration: Option<String>,

    /// Minimum recommendation score (0-100)
    #[arg(long, value_name = "SCORE", allow_hyphen_values = true)]
    pub min_score: Option<String>,

    /// Emit results as JSON instead of a text listing
    #[arg(long)]
    pub json: bool,

    /// Path to the content database
    #[arg(long, value_name = "PATH", env = "RECOMMENDER_DATABASE_PATH")]
    pub database: Option<PathBuf>,
}

/// What a single invocation should show
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Algorithm explanation followed by the top picks
    Default,
    /// Ranked results for the given criteria
    Filtered(FilterCriteria),
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Cli {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            branch: non_empty(&self.branch).map(Branch::from_alias),
            category: non_empty(&self.category).map(str::to_string),
            thinker: non_empty(&self.thinker).map(str::to_string),
            max_duration: non_empty(&self.max_duration).and_then(Threshold::parse),
            min_score: non_empty(&self.min_score).and_then(Threshold::parse),
        }
    }

    pub fn mode(&self) -> Mode {
        let criteria = self.criteria();
        if !self.list_all && criteria.is_empty() {
            Mode::Default
        } else {
            Mode::Filtered(criteria)
        }
    }
}

/// Runs the pipeline over `store` and renders the selected view
pub fn execute(cli: &Cli, store: &ContentStore) -> AppResult<String> {
    let recommender = Recommender::new(store.items());

    match cli.mode() {
        Mode::Default => {
            tracing::debug!(min_score = TOP_PICKS_MIN_SCORE, "Showing default view");
            let picks = recommender.top_picks();
            if cli.json {
                return presenter::render_json(&picks);
            }
            let mut out = presenter::render_algorithm();
            out.push_str(&presenter::render_top_picks_heading(TOP_PICKS_MIN_SCORE));
            out.push_str(&presenter::render_recommendations(&picks));
            Ok(out)
        }
        Mode::Filtered(criteria) => {
            let results = recommender.recommend(&criteria);
            if cli.json {
                presenter::render_json(&results)
            } else {
                Ok(presenter::render_recommendations(&results))
            }
        }
    }
}
