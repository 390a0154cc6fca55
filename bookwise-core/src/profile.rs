//! Reader profiles: the preference signals a ranker may exploit.
//!
//! Every field may be empty. An empty profile is the normal state of a new
//! reader and routes ranking through the cold-start fallback rather than
//! raising an error.

use crate::{BookId, Genres};

/// Preferences of the reader requesting recommendations.
///
/// # Examples
/// ```
/// use bookwise_core::{Genres, UserProfile};
///
/// let profile = UserProfile::new()
///     .with_favorite_genres(Genres::from(["Fantasy", "Mystery"]))
///     .with_saved_book(42)
///     .with_preferred_language("English");
///
/// assert!(profile.has_saved(42));
/// assert_eq!(profile.preferred_language(), Some("English"));
/// assert!(!profile.is_cold_start());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    #[cfg_attr(feature = "serde", serde(default))]
    favorite_genres: Genres,
    #[cfg_attr(feature = "serde", serde(default))]
    saved_books: Vec<BookId>,
    #[cfg_attr(feature = "serde", serde(default))]
    preferred_language: String,
}

impl UserProfile {
    /// Construct a profile carrying no signal.
    ///
    /// # Examples
    /// ```
    /// use bookwise_core::UserProfile;
    ///
    /// assert!(UserProfile::new().is_cold_start());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the favourite genres.
    #[must_use]
    pub fn with_favorite_genres(mut self, genres: Genres) -> Self {
        self.favorite_genres = genres;
        self
    }

    /// Append a saved book, ignoring ids that are already saved.
    #[must_use]
    pub fn with_saved_book(mut self, id: BookId) -> Self {
        self.save_book(id);
        self
    }

    /// Set the preferred language. Blank strings leave the language unset.
    #[must_use]
    pub fn with_preferred_language(mut self, language: impl Into<String>) -> Self {
        self.preferred_language = language.into();
        self
    }

    /// Append a saved book, keeping the first occurrence of each id.
    pub fn save_book(&mut self, id: BookId) {
        if !self.saved_books.contains(&id) {
            self.saved_books.push(id);
        }
    }

    /// Favourite genres declared by the reader.
    #[must_use]
    pub const fn favorite_genres(&self) -> &Genres {
        &self.favorite_genres
    }

    /// Saved book ids in the order they were bookmarked.
    #[must_use]
    pub fn saved_books(&self) -> &[BookId] {
        &self.saved_books
    }

    /// Report whether `id` has been bookmarked.
    #[must_use]
    pub fn has_saved(&self, id: BookId) -> bool {
        self.saved_books.contains(&id)
    }

    /// Preferred language with surrounding whitespace removed.
    ///
    /// Returns `None` when the language is unset or blank.
    #[must_use]
    pub fn preferred_language(&self) -> Option<&str> {
        let trimmed = self.preferred_language.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Report whether the profile offers no preference signal at all.
    ///
    /// The preferred language alone does not count as a signal.
    #[must_use]
    pub fn is_cold_start(&self) -> bool {
        self.favorite_genres.is_empty() && self.saved_books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn saved_books_keep_first_occurrence() {
        let profile = UserProfile::new()
            .with_saved_book(3)
            .with_saved_book(1)
            .with_saved_book(3);
        assert_eq!(profile.saved_books(), &[3, 1]);
    }

    #[rstest]
    #[case("", None)]
    #[case("   ", None)]
    #[case(" English ", Some("English"))]
    fn preferred_language_is_trimmed(#[case] raw: &str, #[case] expected: Option<&str>) {
        let profile = UserProfile::new().with_preferred_language(raw);
        assert_eq!(profile.preferred_language(), expected);
    }

    #[rstest]
    fn language_alone_is_still_cold_start() {
        let profile = UserProfile::new().with_preferred_language("French");
        assert!(profile.is_cold_start());
    }

    #[rstest]
    fn any_saved_book_leaves_cold_start() {
        let profile = UserProfile::new().with_saved_book(9);
        assert!(!profile.is_cold_start());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_fields_default_to_empty() {
        let profile: UserProfile = serde_json::from_str("{}").expect("decode empty profile");
        assert!(profile.is_cold_start());
        assert_eq!(profile.preferred_language(), None);
    }
}
