//! Test-only helpers: an in-memory `BookCatalog` and SQLite seeding
//! utilities used by unit and behaviour tests.

use crate::{Book, BookCatalog};

/// In-memory `BookCatalog` implementation used in tests.
///
/// Books are kept sorted by id so iteration matches the persisted store.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalog {
    books: Vec<Book>,
}

impl MemoryCatalog {
    /// Create a catalog containing a single book.
    #[must_use]
    pub fn with_book(book: Book) -> Self {
        Self::with_books(std::iter::once(book))
    }

    /// Create a catalog from a collection of books.
    #[must_use]
    pub fn with_books<I>(books: I) -> Self
    where
        I: IntoIterator<Item = Book>,
    {
        let mut books: Vec<_> = books.into_iter().collect();
        books.sort_unstable_by_key(|book| book.id);
        Self { books }
    }
}

impl BookCatalog for MemoryCatalog {
    fn books(&self) -> Box<dyn Iterator<Item = Book> + Send + '_> {
        Box::new(self.books.iter().cloned())
    }
}

/// Raw row written by [`write_catalog_database`].
///
/// Genres are stored verbatim so tests can seed malformed payloads.
#[cfg(feature = "store-sqlite")]
#[derive(Debug, Clone)]
pub struct SeedBook {
    /// Book identifier.
    pub id: i64,
    /// Title column.
    pub title: String,
    /// Author column.
    pub author: String,
    /// Raw JSON written to the `genres` column.
    pub genres_json: String,
    /// Rating column.
    pub rating: f64,
    /// Liked percentage column.
    pub liked_percentage: f64,
    /// Language column.
    pub language: String,
}

#[cfg(feature = "store-sqlite")]
impl SeedBook {
    /// Describe a seeded book row.
    #[must_use]
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the books table column by column"
    )]
    pub fn new(
        id: i64,
        title: &str,
        author: &str,
        genres_json: &str,
        rating: f64,
        liked_percentage: f64,
        language: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_owned(),
            author: author.to_owned(),
            genres_json: genres_json.to_owned(),
            rating,
            liked_percentage,
            language: language.to_owned(),
        }
    }
}

/// Schema understood by [`SqliteBookStore`](crate::SqliteBookStore).
#[cfg(feature = "store-sqlite")]
pub const CATALOG_SCHEMA: &str = "
    CREATE TABLE books (
        id INTEGER PRIMARY KEY,
        title TEXT,
        author TEXT,
        genres TEXT,
        rating REAL,
        liked_percentage REAL,
        language TEXT
    );
    CREATE TABLE users (
        id INTEGER PRIMARY KEY,
        preferred_language TEXT
    );
    CREATE TABLE user_favorite_genres (
        user_id INTEGER NOT NULL,
        genre TEXT NOT NULL,
        PRIMARY KEY (user_id, genre)
    );
    CREATE TABLE user_saved_books (
        user_id INTEGER NOT NULL,
        book_id INTEGER NOT NULL,
        position INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (user_id, book_id)
    );
";

/// Create the catalog schema on `connection` and insert `books`.
///
/// # Errors
/// Propagates any `rusqlite` failure.
#[cfg(feature = "store-sqlite")]
pub fn write_catalog_database(
    connection: &rusqlite::Connection,
    books: &[SeedBook],
) -> rusqlite::Result<()> {
    connection.execute_batch(CATALOG_SCHEMA)?;
    let mut statement = connection.prepare(
        "INSERT INTO books (id, title, author, genres, rating, liked_percentage, language)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for book in books {
        statement.execute((
            book.id,
            book.title.as_str(),
            book.author.as_str(),
            book.genres_json.as_str(),
            book.rating,
            book.liked_percentage,
            book.language.as_str(),
        ))?;
    }
    Ok(())
}
