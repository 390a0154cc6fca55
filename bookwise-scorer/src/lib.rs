//! Content-based ranking for Bookwise.
//!
//! [`ContentScorer`] orders a book catalog for one reader by a weighted sum
//! of six signals:
//!
//! - Jaccard similarity between the reader's favourite genres and the book,
//! - Jaccard similarity between the genres of the reader's saved books and
//!   the book,
//! - whether a saved book shares the book's author,
//! - the book's rating out of five,
//! - the book's liked percentage,
//! - whether the book's language matches the reader's preference.
//!
//! The multipliers live in [`ScoreWeights`]. Readers without favourite genres
//! or saved books receive the catalog in top-rated order. Books the reader
//! already saved are never recommended.
//!
//! # Examples
//!
//! ```
//! use bookwise_core::{Book, Genres, UserProfile};
//! use bookwise_scorer::{ContentScorer, RecommendationLimit};
//!
//! let catalog = vec![
//!     Book::new(1, "Dune", "Frank Herbert")
//!         .with_genres(Genres::from(["Science Fiction"]))
//!         .with_rating(4.6),
//!     Book::new(2, "Emma", "Jane Austen")
//!         .with_genres(Genres::from(["Romance"]))
//!         .with_rating(4.1),
//! ];
//! let profile = UserProfile::new().with_favorite_genres(Genres::from(["Romance"]));
//!
//! let top = ContentScorer::default().recommend(&profile, &catalog, RecommendationLimit::new(1));
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].book.title, "Emma");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod content;
mod error;
mod request;
mod signals;
mod weights;

pub use content::ContentScorer;
pub use error::ScoreWeightsError;
pub use request::RecommendationLimit;
pub use signals::{PreferenceSignals, SignalBreakdown};
pub use weights::{ScoreWeights, WEIGHT_SUM_TOLERANCE};
