//! The content-based ranker.
#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::collections::HashSet;
use std::num::FpCategory;

use bookwise_core::{Book, BookId, Ranker, ScoredBook, UserProfile};

use crate::{
    PreferenceSignals, RecommendationLimit, ScoreWeights, ScoreWeightsError, SignalBreakdown,
};

/// Rank books by a weighted sum of content signals.
///
/// Readers with no favourite genres and no saved books get the catalog in
/// top-rated order instead. Books the reader already saved are never
/// returned.
///
/// # Examples
/// ```
/// use bookwise_core::{Book, Genres, UserProfile};
/// use bookwise_scorer::ContentScorer;
///
/// let catalog = vec![
///     Book::new(1, "A", "X")
///         .with_genres(Genres::from(["Fantasy"]))
///         .with_rating(4.0)
///         .with_liked_percentage(80.0)
///         .with_language("English"),
///     Book::new(2, "B", "Y")
///         .with_genres(Genres::from(["Romance"]))
///         .with_rating(5.0)
///         .with_liked_percentage(90.0)
///         .with_language("French"),
/// ];
/// let profile = UserProfile::new()
///     .with_favorite_genres(Genres::from(["Fantasy", "Mystery"]))
///     .with_preferred_language("English");
///
/// let ranked = ContentScorer::default().rank(&profile, &catalog);
/// let ids: Vec<_> = ranked.iter().map(|entry| entry.book.id).collect();
/// assert_eq!(ids, vec![1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentScorer {
    weights: ScoreWeights,
}

impl ContentScorer {
    /// Build a scorer from a custom weight table.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when the table fails
    /// [`ScoreWeights::validate`].
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weight table in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Rank the catalog for `profile`, most relevant first.
    ///
    /// Personalised results are ordered by descending score, then descending
    /// rating, then ascending id. Cold-start results are ordered by
    /// descending rating, then descending liked percentage, then ascending
    /// id, and carry a score of `0.0`.
    #[must_use]
    pub fn rank(&self, profile: &UserProfile, catalog: &[Book]) -> Vec<ScoredBook> {
        let saved: HashSet<BookId> = profile.saved_books().iter().copied().collect();
        let candidates = catalog.iter().filter(|book| !saved.contains(&book.id));

        if profile.is_cold_start() {
            let mut ranked: Vec<&Book> = candidates.collect();
            log::debug!(
                "cold-start profile; ordering {} candidates by rating",
                ranked.len()
            );
            ranked.sort_by(|left, right| compare_top_rated(left, right));
            return ranked
                .into_iter()
                .cloned()
                .map(ScoredBook::top_rated)
                .collect();
        }

        let signals = PreferenceSignals::from_profile(profile, catalog);
        let mut ranked: Vec<ScoredBook> = candidates
            .map(|book| {
                let score = self.score(&signals, book);
                ScoredBook::personalised(book.clone(), score)
            })
            .collect();
        log::debug!(
            "scored {} candidates ({} saved books excluded)",
            ranked.len(),
            catalog.len().saturating_sub(ranked.len())
        );
        ranked.sort_by(compare_personalised);
        ranked
    }

    /// Rank the catalog and keep the first `limit` results.
    #[must_use]
    pub fn recommend(
        &self,
        profile: &UserProfile,
        catalog: &[Book],
        limit: RecommendationLimit,
    ) -> Vec<ScoredBook> {
        let mut ranked = self.rank(profile, catalog);
        ranked.truncate(limit.get());
        ranked
    }

    /// Break down the score of one candidate.
    ///
    /// Returns `None` when `book_id` is absent from the catalog or already
    /// saved by the reader.
    #[must_use]
    pub fn explain(
        &self,
        profile: &UserProfile,
        catalog: &[Book],
        book_id: BookId,
    ) -> Option<SignalBreakdown> {
        if profile.has_saved(book_id) {
            return None;
        }
        let book = catalog.iter().find(|book| book.id == book_id)?;
        let signals = PreferenceSignals::from_profile(profile, catalog);
        Some(SignalBreakdown::for_book(&signals, book))
    }

    fn score(&self, signals: &PreferenceSignals<'_>, book: &Book) -> f32 {
        let raw = SignalBreakdown::for_book(signals, book).combine(self.weights);
        Self::sanitise(raw)
    }
}

impl Ranker for ContentScorer {
    fn rank(&self, profile: &UserProfile, catalog: &[Book]) -> Vec<ScoredBook> {
        Self::rank(self, profile, catalog)
    }
}

fn compare_personalised(left: &ScoredBook, right: &ScoredBook) -> Ordering {
    ordering_key(right.score)
        .total_cmp(&ordering_key(left.score))
        .then_with(|| ordering_key(right.book.rating).total_cmp(&ordering_key(left.book.rating)))
        .then_with(|| left.book.id.cmp(&right.book.id))
}

fn compare_top_rated(left: &Book, right: &Book) -> Ordering {
    ordering_key(right.rating)
        .total_cmp(&ordering_key(left.rating))
        .then_with(|| {
            ordering_key(right.liked_percentage).total_cmp(&ordering_key(left.liked_percentage))
        })
        .then_with(|| left.id.cmp(&right.id))
}

/// Map non-finite values and both signed zeros to `0.0` so they sort with
/// unrated books.
const fn ordering_key(value: f32) -> f32 {
    match value.classify() {
        FpCategory::Normal | FpCategory::Subnormal => value,
        FpCategory::Zero | FpCategory::Infinite | FpCategory::Nan => 0.0,
    }
}
