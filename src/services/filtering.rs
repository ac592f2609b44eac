use crate::models::{FilterCriteria, ScoredItem};

/// Narrows scored items to those satisfying every supplied criterion,
/// preserving their relative order
pub fn apply_filters(mut items: Vec<ScoredItem>, criteria: &FilterCriteria) -> Vec<ScoredItem> {
    items.retain(|item| matches(item, criteria));
    items
}

/// True when `item` satisfies all criteria; absent criteria always hold
pub fn matches(item: &ScoredItem, criteria: &FilterCriteria) -> bool {
    let content = &item.item;

    if let Some(branch) = &criteria.branch {
        if content.branch != *branch {
            return false;
        }
    }

    if let Some(category) = &criteria.category {
        if content.kind != *category {
            return false;
        }
    }

    if let Some(thinker) = &criteria.thinker {
        if !content.indicators.has_entry(thinker) {
            return false;
        }
    }

    if let Some(max_duration) = &criteria.max_duration {
        if !max_duration.admits_at_most(i64::from(content.duration)) {
            return false;
        }
    }

    if let Some(min_score) = &criteria.min_score {
        if !min_score.admits_at_least(i64::from(item.calculated_score)) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Branch, ContentItem, Indicators, SubScores, Threshold};

    fn scored(
        title: &str,
        kind: &str,
        branch: Branch,
        duration: u32,
        thinkers: &[&str],
        score: u32,
    ) -> ScoredItem {
        let mut indicators = Indicators::default();
        for thinker in thinkers {
            indicators
                .thinkers
                .insert(thinker.to_string(), vec!["evidence".to_string()]);
        }
        ScoredItem {
            item: ContentItem {
                title: title.to_string(),
                creator: "Creator".to_string(),
                url: format!("https://example.org/{}", title),
                kind: kind.to_string(),
                branch,
                duration,
                tags: Vec::new(),
                notes: None,
                indicators,
                scores: SubScores {
                    depth_score: 50.0,
                    production_quality: 50.0,
                },
            },
            calculated_score: score,
        }
    }

    fn catalog() -> Vec<ScoredItem> {
        vec![
            scored("a", "podcast", Branch::Main, 90, &["jobs"], 92),
            scored("b", "interview", Branch::Empire, 25, &["ceoFounder"], 85),
            scored("c", "podcast", Branch::Empire, 50, &["jobs", "west"], 84),
            scored("d", "speech", Branch::Other("archive".to_string()), 15, &[], 60),
        ]
    }

    fn titles(items: &[ScoredItem]) -> Vec<&str> {
        items.iter().map(|i| i.item.title.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let result = apply_filters(catalog(), &FilterCriteria::default());
        assert_eq!(titles(&result), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_min_score_is_inclusive() {
        let result = apply_filters(catalog(), &FilterCriteria::min_score(85));
        assert_eq!(titles(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_branch_filter() {
        let criteria = FilterCriteria {
            branch: Some(Branch::from_alias("empire")),
            ..FilterCriteria::default()
        };
        assert_eq!(titles(&apply_filters(catalog(), &criteria)), vec!["b", "c"]);

        let criteria = FilterCriteria {
            branch: Some(Branch::from_alias("archive")),
            ..FilterCriteria::default()
        };
        assert_eq!(titles(&apply_filters(catalog(), &criteria)), vec!["d"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let criteria = FilterCriteria {
            category: Some("podcast".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(titles(&apply_filters(catalog(), &criteria)), vec!["a", "c"]);

        let criteria = FilterCriteria {
            category: Some("Podcast".to_string()),
            ..FilterCriteria::default()
        };
        assert!(apply_filters(catalog(), &criteria).is_empty());
    }

    #[test]
    fn test_thinker_filter_requires_evidence() {
        let mut items = catalog();
        items[1]
            .item
            .indicators
            .thinkers
            .insert("jobs".to_string(), Vec::new());

        let criteria = FilterCriteria {
            thinker: Some("jobs".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(titles(&apply_filters(items, &criteria)), vec!["a", "c"]);
    }

    #[test]
    fn test_thinker_filter_matches_anti_indicators_key() {
        let mut items = catalog();
        items[2]
            .item
            .indicators
            .anti_indicators
            .push("clickbait".to_string());

        let criteria = FilterCriteria {
            thinker: Some("antiIndicators".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(titles(&apply_filters(items, &criteria)), vec!["c"]);
    }

    #[test]
    fn test_max_duration_is_inclusive() {
        let criteria = FilterCriteria {
            max_duration: Some(Threshold::Value(25)),
            ..FilterCriteria::default()
        };
        assert_eq!(titles(&apply_filters(catalog(), &criteria)), vec!["b", "d"]);
    }

    #[test]
    fn test_invalid_threshold_yields_empty_result() {
        let criteria = FilterCriteria {
            max_duration: Some(Threshold::Invalid),
            ..FilterCriteria::default()
        };
        assert!(apply_filters(catalog(), &criteria).is_empty());
    }

    #[test]
    fn test_criteria_combine_as_intersection() {
        let combined = FilterCriteria {
            branch: Some(Branch::Empire),
            thinker: Some("jobs".to_string()),
            min_score: Some(Threshold::Value(80)),
            ..FilterCriteria::default()
        };
        let combined_result = apply_filters(catalog(), &combined);
        assert_eq!(titles(&combined_result), vec!["c"]);

        // Applying the same criteria one at a time, in any order, agrees
        let singles = [
            FilterCriteria {
                min_score: Some(Threshold::Value(80)),
                ..FilterCriteria::default()
            },
            FilterCriteria {
                thinker: Some("jobs".to_string()),
                ..FilterCriteria::default()
            },
            FilterCriteria {
                branch: Some(Branch::Empire),
                ..FilterCriteria::default()
            },
        ];
        let forward = singles
            .iter()
            .fold(catalog(), |items, criteria| apply_filters(items, criteria));
        let backward = singles
            .iter()
            .rev()
            .fold(catalog(), |items, criteria| apply_filters(items, criteria));
        assert_eq!(forward, combined_result);
        assert_eq!(backward, combined_result);
    }
}
