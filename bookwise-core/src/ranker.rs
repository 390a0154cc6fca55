//! Rank a book catalog for a reader.
//!
//! The `Ranker` trait turns a [`UserProfile`](crate::UserProfile) and a
//! catalog of [`Book`](crate::Book) values into an ordered list of
//! [`ScoredBook`] results.

use crate::{Book, UserProfile};

/// How a [`ScoredBook`] earned its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RankingBasis {
    /// Ranked by the weighted preference score.
    Personalised,
    /// Ranked by the non-personalised top-rated fallback; `score` is `0.0`.
    TopRated,
}

/// A book paired with its relevance score.
///
/// With the `serde` feature the book's fields are flattened next to `score`
/// and `basis`, so a JSON consumer sees one object per book.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredBook {
    /// The recommended book.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub book: Book,
    /// Relevance in `0.0..=1.0`.
    pub score: f32,
    /// Which ranking path produced the score.
    pub basis: RankingBasis,
}

impl ScoredBook {
    /// Pair a book with a personalised score.
    #[must_use]
    pub const fn personalised(book: Book, score: f32) -> Self {
        Self {
            book,
            score,
            basis: RankingBasis::Personalised,
        }
    }

    /// Wrap a book ranked by the top-rated fallback.
    #[must_use]
    pub const fn top_rated(book: Book) -> Self {
        Self {
            book,
            score: 0.0,
            basis: RankingBasis::TopRated,
        }
    }

    /// Drop the score and keep the book.
    #[must_use]
    pub fn into_book(self) -> Book {
        self.book
    }
}

/// Order a catalog by relevance to a reader.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single ranker
/// can serve concurrent requests. Ranking is infallible and pure: the same
/// inputs must always produce the same ordered output, and books the reader
/// already saved must never be returned.
///
/// Scores must be finite and lie in `0.0..=1.0`; use [`Ranker::sanitise`] to
/// apply that guard.
///
/// # Examples
///
/// ```rust
/// use bookwise_core::{Book, Ranker, ScoredBook, UserProfile};
///
/// struct CatalogOrder;
///
/// impl Ranker for CatalogOrder {
///     fn rank(&self, profile: &UserProfile, catalog: &[Book]) -> Vec<ScoredBook> {
///         catalog
///             .iter()
///             .filter(|book| !profile.has_saved(book.id))
///             .cloned()
///             .map(ScoredBook::top_rated)
///             .collect()
///     }
/// }
///
/// let catalog = vec![Book::new(1, "A", "X"), Book::new(2, "B", "Y")];
/// let profile = UserProfile::new().with_saved_book(1);
/// let ranked = CatalogOrder.rank(&profile, &catalog);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].book.id, 2);
/// ```
pub trait Ranker: Send + Sync {
    /// Return the catalog minus saved books, most relevant first.
    fn rank(&self, profile: &UserProfile, catalog: &[Book]) -> Vec<ScoredBook>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
