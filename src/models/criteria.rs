use super::Branch;

/// Numeric filter argument, parsed permissively
///
/// A value without leading digits is kept as `Invalid` and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    Value(i64),
    Invalid,
}

impl Threshold {
    /// Parses the leading integer of `raw`, ignoring any trailing text.
    /// Returns `None` for an empty argument, which imposes no constraint.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Some(Threshold::Invalid);
        }

        let value = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
        Some(Threshold::Value(if negative { -value } else { value }))
    }

    /// True when `value` is at most this threshold
    pub fn admits_at_most(&self, value: i64) -> bool {
        match self {
            Threshold::Value(limit) => value <= *limit,
            Threshold::Invalid => false,
        }
    }

    /// True when `value` is at least this threshold
    pub fn admits_at_least(&self, value: i64) -> bool {
        match self {
            Threshold::Value(limit) => value >= *limit,
            Threshold::Invalid => false,
        }
    }
}

/// Independent, optional narrowing criteria; all supplied ones must hold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub branch: Option<Branch>,
    pub category: Option<String>,
    pub thinker: Option<String>,
    pub max_duration: Option<Threshold>,
    pub min_score: Option<Threshold>,
}

impl FilterCriteria {
    /// Criteria for the default "top picks" view
    pub fn min_score(min: i64) -> Self {
        Self {
            min_score: Some(Threshold::Value(min)),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.branch.is_none()
            && self.category.is_none()
            && self.thinker.is_none()
            && self.max_duration.is_none()
            && self.min_score.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(Threshold::parse("85"), Some(Threshold::Value(85)));
        assert_eq!(Threshold::parse("0"), Some(Threshold::Value(0)));
        assert_eq!(Threshold::parse("-10"), Some(Threshold::Value(-10)));
        assert_eq!(Threshold::parse("+7"), Some(Threshold::Value(7)));
    }

    #[test]
    fn test_parse_leading_digits_only() {
        assert_eq!(Threshold::parse("30min"), Some(Threshold::Value(30)));
        assert_eq!(Threshold::parse("  45"), Some(Threshold::Value(45)));
        assert_eq!(Threshold::parse("12.9"), Some(Threshold::Value(12)));
    }

    #[test]
    fn test_parse_invalid_and_empty() {
        assert_eq!(Threshold::parse(""), None);
        assert_eq!(Threshold::parse("abc"), Some(Threshold::Invalid));
        assert_eq!(Threshold::parse("-"), Some(Threshold::Invalid));
        assert_eq!(Threshold::parse("   "), Some(Threshold::Invalid));
    }

    #[test]
    fn test_parse_overflow_saturates() {
        assert_eq!(
            Threshold::parse("99999999999999999999999"),
            Some(Threshold::Value(i64::MAX))
        );
    }

    #[test]
    fn test_invalid_threshold_admits_nothing() {
        assert!(!Threshold::Invalid.admits_at_most(0));
        assert!(!Threshold::Invalid.admits_at_least(100));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let limit = Threshold::Value(60);
        assert!(limit.admits_at_most(60));
        assert!(!limit.admits_at_most(61));
        assert!(limit.admits_at_least(60));
        assert!(!limit.admits_at_least(59));
    }

    #[test]
    fn test_criteria_emptiness() {
        assert!(FilterCriteria::default().is_empty());
        assert!(!FilterCriteria::min_score(85).is_empty());
    }
}
