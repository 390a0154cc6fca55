//! Proptest strategies for ranking property tests.
//!
//! Generated catalogs always satisfy the data contract: ids are unique,
//! ratings lie in `0.0..=5.0` and liked percentages in `0.0..=100.0`.

use bookwise_core::{Book, BookId, Genres, UserProfile};
use proptest::prelude::*;

const GENRES: &[&str] = &[
    "Fantasy",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Horror",
    "Classics",
];

const AUTHORS: &[&str] = &["", "Ursula K. Le Guin", "Agatha Christie", "Jane Austen"];

const LANGUAGES: &[&str] = &["", "English", "english", "French", " German "];

/// Strategy for a genre set of up to four names, possibly empty.
pub fn genres_strategy() -> impl Strategy<Value = Genres> {
    proptest::sample::subsequence(GENRES, 0..=4).prop_map(|names| names.into_iter().collect())
}

/// Strategy for a non-empty genre set.
pub fn non_empty_genres_strategy() -> impl Strategy<Value = Genres> {
    proptest::sample::subsequence(GENRES, 1..=4).prop_map(|names| names.into_iter().collect())
}

fn language_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(LANGUAGES)
}

fn book_fields_strategy() -> impl Strategy<Value = (Genres, &'static str, f32, f32, &'static str)>
{
    (
        genres_strategy(),
        proptest::sample::select(AUTHORS),
        0.0_f32..=5.0_f32,
        0.0_f32..=100.0_f32,
        language_strategy(),
    )
}

/// Strategy for a catalog of `min_count..=max_count` books with ids `1..`.
pub fn catalog_strategy(min_count: usize, max_count: usize) -> impl Strategy<Value = Vec<Book>> {
    proptest::collection::vec(book_fields_strategy(), min_count..=max_count).prop_map(|fields| {
        (1_u64..)
            .zip(fields)
            .map(|(id, (genres, author, rating, liked, language))| {
                Book::new(id, format!("Book {id}"), author)
                    .with_genres(genres)
                    .with_rating(rating)
                    .with_liked_percentage(liked)
                    .with_language(language)
            })
            .collect()
    })
}

/// Strategy for a profile whose saved ids are drawn from `1..=max_id`.
///
/// Ids above the catalog size exercise saved books missing from the catalog.
pub fn profile_strategy(max_id: BookId) -> impl Strategy<Value = UserProfile> {
    (
        genres_strategy(),
        proptest::collection::vec(1..=max_id, 0..=4),
        language_strategy(),
    )
        .prop_map(|(favourites, saved, language)| {
            saved.into_iter().fold(
                UserProfile::new()
                    .with_favorite_genres(favourites)
                    .with_preferred_language(language),
                UserProfile::with_saved_book,
            )
        })
}

/// Strategy for a profile that only carries a language preference.
pub fn cold_start_profile_strategy() -> impl Strategy<Value = UserProfile> {
    language_strategy().prop_map(|language| UserProfile::new().with_preferred_language(language))
}
