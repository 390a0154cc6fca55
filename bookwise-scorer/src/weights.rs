//! The weight table applied to the content signals.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::ScoreWeightsError;

/// Largest tolerated distance between the weight total and `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f32 = 1e-4;

/// Tunable multipliers applied to each content signal.
///
/// The defaults reproduce the production formula. Overrides must stay finite,
/// non-negative, and sum to one so that combined scores remain in
/// `0.0..=1.0`; [`ScoreWeights::validate`] enforces this.
///
/// Missing fields deserialise to their default value.
///
/// # Examples
/// ```
/// use bookwise_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert!((weights.total() - 1.0).abs() < 1e-6);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreWeights {
    /// Similarity between the reader's favourite genres and the book.
    pub favorite_genre: f32,
    /// Similarity between the genres of the reader's saved books and the book.
    pub saved_genre: f32,
    /// Bonus when the book's author wrote one of the saved books.
    pub author: f32,
    /// Normalised average rating.
    pub rating: f32,
    /// Normalised liked percentage.
    pub liked_pct: f32,
    /// Bonus when the book's language matches the reader's preference.
    pub language: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            favorite_genre: 0.40_f32,
            saved_genre: 0.20_f32,
            author: 0.15_f32,
            rating: 0.15_f32,
            liked_pct: 0.05_f32,
            language: 0.05_f32,
        }
    }
}

impl ScoreWeights {
    /// Return each weight alongside the signal it applies to.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, f32); 6] {
        [
            ("favorite_genre", self.favorite_genre),
            ("saved_genre", self.saved_genre),
            ("author", self.author),
            ("rating", self.rating),
            ("liked_pct", self.liked_pct),
            ("language", self.language),
        ]
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.entries().iter().map(|(_, weight)| weight).sum()
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is not finite, is
    /// negative, or the weights do not sum to `1.0` within
    /// [`WEIGHT_SUM_TOLERANCE`].
    #[expect(
        clippy::float_arithmetic,
        reason = "validation compares the weight total against one"
    )]
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (signal, weight) in self.entries() {
            if !weight.is_finite() {
                return Err(ScoreWeightsError::NonFinite { signal });
            }
            if weight < 0.0_f32 {
                return Err(ScoreWeightsError::Negative { signal, weight });
            }
        }
        let total = self.total();
        if (total - 1.0_f32).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoreWeightsError::Unnormalised { total });
        }
        Ok(self)
    }
}
