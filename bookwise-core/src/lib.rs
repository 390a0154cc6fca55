//! Core domain types for the Bookwise recommendation engine.
//!
//! The crate models the inputs and outputs of ranking: catalog entries
//! ([`Book`]), their [`Genres`], the reader's [`UserProfile`], and ranked
//! [`ScoredBook`] results. The [`Ranker`] trait is the seam scorers plug
//! into, and [`BookCatalog`] abstracts where the catalog comes from.
//!
//! With the `store-sqlite` feature the crate also provides
//! [`SqliteBookStore`], a read-only loader for catalogs persisted in SQLite.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod book;
mod genre;
pub mod profile;
pub mod ranker;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use book::{Book, BookError, BookId, MAX_LIKED_PERCENTAGE, MAX_RATING};
pub use genre::Genres;
pub use profile::UserProfile;
pub use ranker::{Ranker, RankingBasis, ScoredBook};
pub use store::BookCatalog;
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteBookStore, SqliteBookStoreError};
