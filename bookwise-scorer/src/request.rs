//! Result-size policy for recommendation requests.
#![forbid(unsafe_code)]

use std::num::IntErrorKind;

/// Number of recommendations to return.
///
/// Values outside `MIN..=MAX` are clamped rather than rejected.
///
/// # Examples
/// ```
/// use bookwise_scorer::RecommendationLimit;
///
/// assert_eq!(RecommendationLimit::default().get(), 4);
/// assert_eq!(RecommendationLimit::new(100).get(), 24);
/// assert_eq!(RecommendationLimit::from_query(Some("abc")).get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecommendationLimit(usize);

impl RecommendationLimit {
    /// Limit used when the request does not name one.
    pub const DEFAULT: usize = 4;
    /// Smallest accepted limit.
    pub const MIN: usize = 1;
    /// Largest accepted limit.
    pub const MAX: usize = 24;

    /// Clamp `limit` into `MIN..=MAX`.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self(limit.clamp(Self::MIN, Self::MAX))
    }

    /// Parse a raw query value.
    ///
    /// Missing or non-numeric values fall back to [`Self::DEFAULT`]. Integers,
    /// including ones too large to represent, are clamped.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(value) = raw.map(str::trim) else {
            return Self::default();
        };
        match value.parse::<i64>() {
            Ok(parsed) => Self::new(usize::try_from(parsed.max(0)).unwrap_or(Self::MAX)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Self::new(Self::MAX),
                IntErrorKind::NegOverflow => Self::new(Self::MIN),
                _ => Self::default(),
            },
        }
    }

    /// The limit as a count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for RecommendationLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<usize> for RecommendationLimit {
    fn from(limit: usize) -> Self {
        Self::new(limit)
    }
}
