use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt::Display};

/// Wire identifier of the main branch
pub const MAIN_BRANCH_ID: &str = "main";
/// Wire identifier of the business/entrepreneurship branch
pub const EMPIRE_BRANCH_ID: &str = "ben-and-alex-empire";
/// Key of the penalty evidence list inside `indicators`
pub const ANTI_INDICATORS_KEY: &str = "antiIndicators";

/// Origin grouping of a content item
///
/// Unrecognized identifiers are kept verbatim so they can still be matched
/// by an exact branch filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Branch {
    Main,
    Empire,
    Other(String),
}

impl Branch {
    /// Resolves a branch filter value, accepting the short `empire` alias
    pub fn from_alias(value: &str) -> Self {
        match value {
            "empire" => Branch::Empire,
            other => Branch::from(other),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Branch::Main => MAIN_BRANCH_ID,
            Branch::Empire => EMPIRE_BRANCH_ID,
            Branch::Other(id) => id,
        }
    }
}

impl From<String> for Branch {
    fn from(id: String) -> Self {
        match id.as_str() {
            MAIN_BRANCH_ID => Branch::Main,
            EMPIRE_BRANCH_ID => Branch::Empire,
            _ => Branch::Other(id),
        }
    }
}

impl From<&str> for Branch {
    fn from(id: &str) -> Self {
        Branch::from(id.to_string())
    }
}

impl From<Branch> for String {
    fn from(branch: Branch) -> Self {
        match branch {
            Branch::Other(id) => id,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Thinker evidence attached to a content item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// Evidence that the content should be penalized
    #[serde(
        rename = "antiIndicators",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub anti_indicators: Vec<String>,
    /// Evidence strings keyed by thinker
    #[serde(flatten)]
    pub thinkers: BTreeMap<String, Vec<String>>,
}

impl Indicators {
    /// Evidence recorded for a thinker; empty when the key is absent
    pub fn evidence(&self, thinker: &str) -> &[String] {
        self.thinkers.get(thinker).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_evidence(&self, thinker: &str) -> bool {
        !self.evidence(thinker).is_empty()
    }

    /// Non-empty list under any `indicators` key, `antiIndicators` included
    pub fn has_entry(&self, key: &str) -> bool {
        if key == ANTI_INDICATORS_KEY {
            return !self.anti_indicators.is_empty();
        }
        self.has_evidence(key)
    }
}

/// Pre-assessed quality signals, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub depth_score: f64,
    pub production_quality: f64,
}

/// A podcast, talk, interview or other media item from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub title: String,
    pub creator: String,
    pub url: String,
    /// Category tag (podcast, interview, speech, lecture, documentary, ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub branch: Branch,
    /// Length in minutes
    pub duration: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub indicators: Indicators,
    pub scores: SubScores,
}

/// A content item together with its derived recommendation score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: ContentItem,
    pub calculated_score: u32,
}

/// Top-level layout of the JSON content database
#[derive(Debug, Clone, Deserialize)]
pub struct ContentDatabase {
    pub content: Vec<ContentItem>,
}
