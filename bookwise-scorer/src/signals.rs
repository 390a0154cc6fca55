//! Content signals extracted from a reader profile and a candidate book.
//!
//! Every signal is normalised into `0.0..=1.0`. Absent preferences (no
//! favourite genres, nothing saved, no preferred language, a book without
//! genres) all flow through the same comparisons and yield `0.0`, so no
//! signal needs a special case.
#![forbid(unsafe_code)]

use std::collections::HashSet;

use bookwise_core::{Book, BookId, Genres, MAX_LIKED_PERCENTAGE, MAX_RATING, UserProfile};
use serde::Serialize;

use crate::ScoreWeights;

/// Reader preferences resolved once per ranking call.
#[derive(Debug, Clone)]
pub struct PreferenceSignals<'a> {
    favorite_genres: &'a Genres,
    saved_genres: Genres,
    saved_authors: HashSet<&'a str>,
    preferred_language: Option<String>,
}

impl<'a> PreferenceSignals<'a> {
    /// Resolve the reader's saved books against `catalog` and collect their
    /// genres and authors.
    ///
    /// Saved ids missing from the catalog contribute nothing.
    #[must_use]
    pub fn from_profile(profile: &'a UserProfile, catalog: &'a [Book]) -> Self {
        let saved: HashSet<BookId> = profile.saved_books().iter().copied().collect();
        let mut saved_genres = Genres::new();
        let mut saved_authors = HashSet::new();
        for book in catalog.iter().filter(|book| saved.contains(&book.id)) {
            saved_genres.extend_from(&book.genres);
            if !book.author.is_empty() {
                saved_authors.insert(book.author.as_str());
            }
        }
        Self {
            favorite_genres: profile.favorite_genres(),
            saved_genres,
            saved_authors,
            preferred_language: profile.preferred_language().map(str::to_lowercase),
        }
    }

    /// Union of genres across the reader's saved books.
    #[must_use]
    pub const fn saved_genres(&self) -> &Genres {
        &self.saved_genres
    }

    /// Report whether `author` wrote one of the saved books.
    #[must_use]
    pub fn is_saved_author(&self, author: &str) -> bool {
        !author.is_empty() && self.saved_authors.contains(author)
    }

    /// Report whether `language` matches the preference, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn matches_language(&self, language: &str) -> bool {
        self.preferred_language
            .as_deref()
            .is_some_and(|preferred| preferred == language.trim().to_lowercase())
    }
}

/// Un-weighted sub-scores for one candidate book.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SignalBreakdown {
    /// Jaccard similarity between favourite genres and the book's genres.
    pub favorite_genre: f32,
    /// Jaccard similarity between saved-book genres and the book's genres.
    pub saved_genre: f32,
    /// `1.0` when a saved book shares the author.
    pub author: f32,
    /// Rating divided by five.
    pub rating: f32,
    /// Liked percentage divided by one hundred.
    pub liked_pct: f32,
    /// `1.0` when the language matches the preference.
    pub language: f32,
}

impl SignalBreakdown {
    /// Compute every signal for `book`.
    #[must_use]
    pub fn for_book(signals: &PreferenceSignals<'_>, book: &Book) -> Self {
        Self {
            favorite_genre: signals.favorite_genres.jaccard(&book.genres),
            saved_genre: signals.saved_genres.jaccard(&book.genres),
            author: indicator(signals.is_saved_author(&book.author)),
            rating: normalise(book.rating, MAX_RATING),
            liked_pct: normalise(book.liked_percentage, MAX_LIKED_PERCENTAGE),
            language: indicator(signals.matches_language(&book.language)),
        }
    }

    /// Weighted sum of the signals.
    ///
    /// The result is not clamped; callers sanitise it into `0.0..=1.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is a weighted sum of normalised signals"
    )]
    pub const fn combine(&self, weights: ScoreWeights) -> f32 {
        weights.favorite_genre * self.favorite_genre
            + weights.saved_genre * self.saved_genre
            + weights.author * self.author
            + weights.rating * self.rating
            + weights.liked_pct * self.liked_pct
            + weights.language * self.language
    }
}

const fn indicator(matched: bool) -> f32 {
    if matched { 1.0 } else { 0.0 }
}

#[expect(
    clippy::float_arithmetic,
    reason = "normalisation divides by the field's maximum"
)]
const fn normalise(value: f32, max: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const TOLERANCE: f32 = 1e-6;

    #[fixture]
    fn catalog() -> Vec<Book> {
        vec![
            Book::new(1, "Saved A", "Ursula K. Le Guin")
                .with_genres(Genres::from(["Fantasy", "Science Fiction"])),
            Book::new(2, "Saved B", "").with_genres(Genres::from(["Horror"])),
            Book::new(3, "Candidate", "Ursula K. Le Guin")
                .with_genres(Genres::from(["Fantasy"]))
                .with_rating(4.0)
                .with_liked_percentage(80.0)
                .with_language(" english "),
        ]
    }

    #[rstest]
    fn saved_books_resolve_against_catalog(catalog: Vec<Book>) {
        let profile = UserProfile::new().with_saved_book(1).with_saved_book(2).with_saved_book(404);
        let signals = PreferenceSignals::from_profile(&profile, &catalog);
        assert_eq!(
            signals.saved_genres(),
            &Genres::from(["Fantasy", "Horror", "Science Fiction"])
        );
        assert!(signals.is_saved_author("Ursula K. Le Guin"));
        assert!(!signals.is_saved_author(""), "blank authors never match");
    }

    #[rstest]
    fn breakdown_covers_every_signal(catalog: Vec<Book>) {
        let profile = UserProfile::new()
            .with_favorite_genres(Genres::from(["Fantasy", "Mystery"]))
            .with_saved_book(1)
            .with_preferred_language("English");
        let signals = PreferenceSignals::from_profile(&profile, &catalog);
        let candidate = catalog.get(2).expect("candidate book");
        let breakdown = SignalBreakdown::for_book(&signals, candidate);

        assert!((breakdown.favorite_genre - 0.5).abs() <= TOLERANCE);
        assert!((breakdown.saved_genre - 0.5).abs() <= TOLERANCE);
        assert!((breakdown.author - 1.0).abs() <= TOLERANCE);
        assert!((breakdown.rating - 0.8).abs() <= TOLERANCE);
        assert!((breakdown.liked_pct - 0.8).abs() <= TOLERANCE);
        assert!((breakdown.language - 1.0).abs() <= TOLERANCE);
    }

    #[rstest]
    #[case("", "English", false)]
    #[case("English", "english", true)]
    #[case("English", " ENGLISH ", true)]
    #[case("English", "French", false)]
    #[case("English", "", false)]
    #[case("español", "ESPAÑOL", true)]
    fn language_matching(#[case] preferred: &str, #[case] language: &str, #[case] expected: bool) {
        let profile = UserProfile::new().with_preferred_language(preferred);
        let signals = PreferenceSignals::from_profile(&profile, &[]);
        assert_eq!(signals.matches_language(language), expected);
    }

    #[rstest]
    #[case(2.5, 0.5)]
    #[case(-1.0, 0.0)]
    #[case(7.0, 1.0)]
    #[case(f32::NAN, 0.0)]
    fn rating_is_clamped(#[case] rating: f32, #[case] expected: f32) {
        let profile = UserProfile::new();
        let signals = PreferenceSignals::from_profile(&profile, &[]);
        let book = Book::new(1, "T", "A").with_rating(rating);
        let breakdown = SignalBreakdown::for_book(&signals, &book);
        assert!((breakdown.rating - expected).abs() <= TOLERANCE);
    }

    #[rstest]
    fn empty_book_genres_give_zero_genre_signals() {
        let profile = UserProfile::new().with_favorite_genres(Genres::from(["Fantasy"]));
        let signals = PreferenceSignals::from_profile(&profile, &[]);
        let book = Book::new(1, "T", "A");
        let breakdown = SignalBreakdown::for_book(&signals, &book);
        assert_eq!(breakdown.favorite_genre, 0.0);
        assert_eq!(breakdown.saved_genre, 0.0);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn all_signals_saturated_combine_to_one() {
        let breakdown = SignalBreakdown {
            favorite_genre: 1.0,
            saved_genre: 1.0,
            author: 1.0,
            rating: 1.0,
            liked_pct: 1.0,
            language: 1.0,
        };
        let total = breakdown.combine(ScoreWeights::default());
        assert!((total - 1.0).abs() <= 1e-5);
    }
}
