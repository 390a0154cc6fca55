//! Catalog entries and the numeric ranges they must respect.

use thiserror::Error;

use crate::Genres;

/// Identifier of a catalog entry.
pub type BookId = u64;

/// Highest rating a book can carry.
pub const MAX_RATING: f32 = 5.0;

/// Highest liked percentage a book can carry.
pub const MAX_LIKED_PERCENTAGE: f32 = 100.0;

/// A catalog entry eligible for recommendation.
///
/// Fields are public so loaders can build books directly; use
/// [`Book::validate`] to check the numeric ranges before handing a catalog to
/// a ranker.
///
/// # Examples
/// ```
/// use bookwise_core::{Book, Genres};
///
/// let book = Book::new(7, "The Hobbit", "J. R. R. Tolkien")
///     .with_genres(Genres::from(["Fantasy"]))
///     .with_rating(4.3)
///     .with_liked_percentage(92.0)
///     .with_language("English");
///
/// assert_eq!(book.id, 7);
/// assert!(book.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    /// Unique identifier.
    pub id: BookId,
    /// Display title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Author name as stored in the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: String,
    /// Genres the book belongs to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Genres,
    /// Average rating in `0.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f32,
    /// Share of readers who liked the book, in `0.0..=100.0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub liked_percentage: f32,
    /// Language the edition is written in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub language: String,
}

/// Errors returned by [`Book::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The rating was not a finite value in `0.0..=5.0`.
    #[error("book {id} has rating {rating}, expected a value between 0 and 5")]
    RatingOutOfRange {
        /// Identifier of the offending book.
        id: BookId,
        /// Rating found on the book.
        rating: f32,
    },
    /// The liked percentage was not a finite value in `0.0..=100.0`.
    #[error("book {id} has liked percentage {liked_percentage}, expected a value between 0 and 100")]
    LikedPercentageOutOfRange {
        /// Identifier of the offending book.
        id: BookId,
        /// Liked percentage found on the book.
        liked_percentage: f32,
    },
}

impl Book {
    /// Construct a book with no genres, zero rating, and no language.
    #[must_use]
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genres: Genres::new(),
            rating: 0.0,
            liked_percentage: 0.0,
            language: String::new(),
        }
    }

    /// Replace the genre set.
    #[must_use]
    pub fn with_genres(mut self, genres: Genres) -> Self {
        self.genres = genres;
        self
    }

    /// Set the average rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Set the liked percentage.
    #[must_use]
    pub const fn with_liked_percentage(mut self, liked_percentage: f32) -> Self {
        self.liked_percentage = liked_percentage;
        self
    }

    /// Set the edition language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Check the numeric fields against their documented ranges.
    ///
    /// # Errors
    /// Returns [`BookError`] naming the first field outside its range.
    pub fn validate(&self) -> Result<(), BookError> {
        if !in_range(self.rating, MAX_RATING) {
            return Err(BookError::RatingOutOfRange {
                id: self.id,
                rating: self.rating,
            });
        }
        if !in_range(self.liked_percentage, MAX_LIKED_PERCENTAGE) {
            return Err(BookError::LikedPercentageOutOfRange {
                id: self.id,
                liked_percentage: self.liked_percentage,
            });
        }
        Ok(())
    }
}

fn in_range(value: f32, max: f32) -> bool {
    value.is_finite() && (0.0..=max).contains(&value)
}
