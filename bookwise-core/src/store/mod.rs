//! Data access traits for the book catalog.
//!
//! The `BookCatalog` trait defines a read-only interface for retrieving the
//! [`Book`] values a ranker should consider.

use crate::{Book, BookId};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteBookStore, SqliteBookStoreError};

/// Read-only access to the persisted book catalog.
///
/// # Examples
///
/// ```rust
/// use bookwise_core::{Book, BookCatalog};
///
/// struct Shelf {
///     books: Vec<Book>,
/// }
///
/// impl BookCatalog for Shelf {
///     fn books(&self) -> Box<dyn Iterator<Item = Book> + Send + '_> {
///         Box::new(self.books.iter().cloned())
///     }
/// }
///
/// let shelf = Shelf { books: vec![Book::new(1, "Emma", "Jane Austen")] };
/// assert_eq!(shelf.book(1).map(|book| book.title), Some("Emma".to_owned()));
/// assert!(shelf.book(2).is_none());
/// ```
pub trait BookCatalog {
    /// Return every book in the catalog in ascending id order.
    fn books(&self) -> Box<dyn Iterator<Item = Book> + Send + '_>;

    /// Look up a single book by id.
    fn book(&self, id: BookId) -> Option<Book> {
        self.books().find(|book| book.id == id)
    }

    /// Materialise the catalog for ranking.
    fn to_vec(&self) -> Vec<Book> {
        self.books().collect()
    }
}
