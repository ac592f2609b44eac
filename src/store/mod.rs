//! Content store abstraction
//!
//! A `ContentSource` supplies the raw catalog; `ContentStore` validates it
//! once and then holds it read-only for the rest of the run.

use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::ContentItem,
};

pub mod json;

pub use json::JsonFileSource;

/// Trait for catalog backends
#[cfg_attr(test, mockall::automock)]
pub trait ContentSource {
    /// Loads every content item, in source order
    fn load_content(&self) -> AppResult<Vec<ContentItem>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Immutable, validated catalog of content items
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    items: Vec<ContentItem>,
}

impl ContentStore {
    /// Loads and validates the full catalog; any invalid item fails the load
    #[instrument(skip(source), fields(source = source.name()))]
    pub fn load(source: &dyn ContentSource) -> AppResult<Self> {
        let items = source.load_content()?;
        tracing::debug!(count = items.len(), "Content loaded, validating");

        let store = Self::from_items(items)?;
        tracing::info!(count = store.len(), "Content store ready");
        Ok(store)
    }

    pub fn from_items(items: Vec<ContentItem>) -> AppResult<Self> {
        for (index, item) in items.iter().enumerate() {
            validate_item(index, item)?;
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_item(index: usize, item: &ContentItem) -> AppResult<()> {
    let sub_scores = [
        ("depthScore", item.scores.depth_score),
        ("productionQuality", item.scores.production_quality),
    ];

    for (name, value) in sub_scores {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(AppError::InvalidItem {
                index,
                title: item.title.clone(),
                reason: format!("{} must be within [0, 100], got {}", name, value),
            });
        }
    }

    Ok(())
}
