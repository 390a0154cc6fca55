//! Genre sets and the similarity measure used to compare them.
//!
//! [`Genres`] is the single representation of "which genres does this thing
//! belong to" for books, user favourites, and the union of a user's saved
//! shelf. An empty set is a legitimate value meaning "no genre signal" and
//! always compares as `0.0` through [`Genres::jaccard`].
//!
//! # Examples
//! ```
//! use bookwise_core::Genres;
//!
//! let favourites = Genres::from(["Fantasy", "Mystery"]);
//! let book = Genres::from(["Fantasy"]);
//! assert_eq!(favourites.jaccard(&book), 0.5);
//! assert_eq!(Genres::new().jaccard(&book), 0.0);
//! ```

use std::collections::BTreeSet;
use std::collections::btree_set;

/// Sorted, de-duplicated set of genre names.
///
/// Names are trimmed on insertion and blank names are discarded. Comparison
/// is exact after trimming: `"Sci-Fi"` and `"sci-fi"` are different genres.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
pub struct Genres {
    names: BTreeSet<String>,
}

impl Genres {
    /// Construct an empty genre set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Insert a genre name, returning `true` when it was not already present.
    ///
    /// Blank names are ignored and report `false`.
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return false;
        }
        self.names.insert(trimmed.to_owned())
    }

    /// Report whether the set contains `name` (after trimming).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name.trim())
    }

    /// Number of distinct genres.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Report whether the set carries no genre signal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over genre names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Return a new set holding every genre in `self` or `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            names: self.names.union(&other.names).cloned().collect(),
        }
    }

    /// Add every genre of `other` to `self`.
    pub fn extend_from(&mut self, other: &Self) {
        self.names.extend(other.names.iter().cloned());
    }

    /// Jaccard similarity `|A ∩ B| / |A ∪ B|`.
    ///
    /// Returns `0.0` when both sets are empty, so an absent signal never
    /// contributes to a score.
    ///
    /// # Examples
    /// ```
    /// use bookwise_core::Genres;
    ///
    /// let a = Genres::from(["Fantasy", "Mystery"]);
    /// let b = Genres::from(["Mystery", "Thriller"]);
    /// assert!((a.jaccard(&b) - 1.0 / 3.0).abs() < 1e-6);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "similarity is a ratio of small set cardinalities"
    )]
    pub fn jaccard(&self, other: &Self) -> f32 {
        let shared = self.names.intersection(&other.names).count();
        let combined = self.names.union(&other.names).count();
        if combined == 0 {
            return 0.0;
        }
        shared as f32 / combined as f32
    }
}

impl<S: AsRef<str>> FromIterator<S> for Genres {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut genres = Self::new();
        for name in iter {
            genres.insert(name);
        }
        genres
    }
}

impl<S: AsRef<str>> Extend<S> for Genres {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<const N: usize> From<[&str; N]> for Genres {
    fn from(names: [&str; N]) -> Self {
        names.into_iter().collect()
    }
}

impl From<Vec<String>> for Genres {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<Genres> for Vec<String> {
    fn from(genres: Genres) -> Self {
        genres.names.into_iter().collect()
    }
}

impl IntoIterator for Genres {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}
