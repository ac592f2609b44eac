use std::path::{Path, PathBuf};

use crate::{
    error::{AppError, AppResult},
    models::{ContentDatabase, ContentItem},
};

use super::ContentSource;

/// Reads the catalog from a JSON document of the form `{ "content": [...] }`
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for JsonFileSource {
    fn load_content(&self) -> AppResult<Vec<ContentItem>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| AppError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = raw.len(), "Read content database");

        parse_database(&raw)
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

/// Parses a JSON content database document
pub fn parse_database(raw: &str) -> AppResult<Vec<ContentItem>> {
    let database: ContentDatabase = serde_json::from_str(raw)?;
    Ok(database.content)
}
