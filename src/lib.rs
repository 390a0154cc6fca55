//! Facade crate for the Bookwise recommendation engine.
//!
//! This crate re-exports the core domain types and the content scorer, and
//! exposes the SQLite catalog store behind the `store-sqlite` feature.
//!
//! # Examples
//!
//! ```
//! use bookwise::{Book, ContentScorer, Genres, RecommendationLimit, UserProfile};
//!
//! let catalog = vec![
//!     Book::new(1, "Rebecca", "Daphne du Maurier")
//!         .with_genres(Genres::from(["Mystery", "Gothic"]))
//!         .with_rating(4.2),
//!     Book::new(2, "Persuasion", "Jane Austen")
//!         .with_genres(Genres::from(["Romance"]))
//!         .with_rating(4.1),
//! ];
//! let reader = UserProfile::new().with_favorite_genres(Genres::from(["Mystery"]));
//!
//! let picks = ContentScorer::default().recommend(&reader, &catalog, RecommendationLimit::default());
//! assert_eq!(picks.first().map(|pick| pick.book.id), Some(1));
//! ```

#![forbid(unsafe_code)]

pub use bookwise_core::{
    Book, BookCatalog, BookError, BookId, Genres, MAX_LIKED_PERCENTAGE, MAX_RATING, Ranker,
    RankingBasis, ScoredBook, UserProfile,
};
pub use bookwise_scorer::{
    ContentScorer, PreferenceSignals, RecommendationLimit, ScoreWeights, ScoreWeightsError,
    SignalBreakdown, WEIGHT_SUM_TOLERANCE,
};

#[cfg(feature = "store-sqlite")]
pub use bookwise_core::{SqliteBookStore, SqliteBookStoreError};
