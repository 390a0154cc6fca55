//! SQLite-backed store for the book catalog and reader profiles.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::warn;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row};
use thiserror::Error;

use crate::{Book, BookError, BookId, Genres, UserProfile};

use super::BookCatalog;

const SELECT_BOOKS_SQL: &str = "SELECT id, title, author, genres, rating, liked_percentage, language
     FROM books ORDER BY id";
const SELECT_USER_SQL: &str = "SELECT preferred_language FROM users WHERE id = ?1";
const SELECT_FAVOURITES_SQL: &str =
    "SELECT genre FROM user_favorite_genres WHERE user_id = ?1 ORDER BY genre";
const SELECT_SAVED_SQL: &str =
    "SELECT book_id FROM user_saved_books WHERE user_id = ?1 ORDER BY position, book_id";

/// Error raised when reading or validating persisted catalog data.
#[derive(Debug, Error)]
pub enum SqliteBookStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored identifier could not be represented as `u64`/`i64`.
    #[error("identifier {id} is outside the supported range")]
    IdOutOfRange {
        /// Raw identifier, widened for reporting.
        id: i128,
    },
    /// The stored genre payload was not valid JSON.
    #[error("failed to parse genres for book {id}: {source}")]
    InvalidGenres {
        /// Identifier of the book whose genres failed to parse.
        id: BookId,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A stored book violated the catalog's numeric ranges.
    #[error(transparent)]
    InvalidBook(#[from] BookError),
    /// No reader exists with the requested identifier.
    #[error("user {user_id} does not exist")]
    UnknownUser {
        /// Requested reader identifier.
        user_id: u64,
    },
    /// Generic SQLite error when reading rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only catalog loaded from SQLite.
///
/// The full catalog is read and validated when the store is opened; reader
/// profiles are looked up on demand through the retained read-only
/// connection.
pub struct SqliteBookStore {
    connection: Connection,
    books: Vec<Book>,
}

impl fmt::Debug for SqliteBookStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteBookStore")
            .field("books", &self.books.len())
            .finish_non_exhaustive()
    }
}

impl SqliteBookStore {
    /// Open a store backed by the SQLite database at `database_path`.
    ///
    /// # Errors
    /// Returns [`SqliteBookStoreError`] when the database cannot be opened or
    /// a stored book fails to decode or validate.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteBookStoreError>
    where
        P: AsRef<Path>,
    {
        let database_path = database_path.as_ref();
        let connection =
            Connection::open_with_flags(database_path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
                |source| SqliteBookStoreError::OpenDatabase {
                    path: database_path.to_path_buf(),
                    source,
                },
            )?;
        let books = load_books(&connection)?;
        Ok(Self { connection, books })
    }

    /// Number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Report whether the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Borrow the loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Book] {
        &self.books
    }

    /// Load the profile of reader `user_id`.
    ///
    /// Favourite genres come back sorted and saved books keep their bookmark
    /// order.
    ///
    /// # Errors
    /// Returns [`SqliteBookStoreError::UnknownUser`] when no such reader
    /// exists, or a database error when a query fails.
    pub fn user_profile(&self, user_id: u64) -> Result<UserProfile, SqliteBookStoreError> {
        let key = i64::try_from(user_id).map_err(|_| SqliteBookStoreError::IdOutOfRange {
            id: i128::from(user_id),
        })?;

        let language: Option<Option<String>> = self
            .connection
            .query_row(SELECT_USER_SQL, [key], |row| row.get(0))
            .optional()?;
        let Some(language) = language else {
            return Err(SqliteBookStoreError::UnknownUser { user_id });
        };

        let mut statement = self.connection.prepare(SELECT_FAVOURITES_SQL)?;
        let favourites = statement
            .query_map([key], |row| row.get::<_, String>(0))?
            .collect::<Result<Genres, _>>()?;

        let mut profile = UserProfile::new()
            .with_favorite_genres(favourites)
            .with_preferred_language(language.unwrap_or_default());

        let mut statement = self.connection.prepare(SELECT_SAVED_SQL)?;
        let mut rows = statement.query([key])?;
        while let Some(row) = rows.next()? {
            let raw: i64 = row.get(0)?;
            profile.save_book(to_book_id(raw)?);
        }

        Ok(profile)
    }
}

impl BookCatalog for SqliteBookStore {
    fn books(&self) -> Box<dyn Iterator<Item = Book> + Send + '_> {
        Box::new(self.books.iter().cloned())
    }

    fn book(&self, id: BookId) -> Option<Book> {
        self.books
            .binary_search_by_key(&id, |book| book.id)
            .ok()
            .and_then(|index| self.books.get(index))
            .cloned()
    }

    fn to_vec(&self) -> Vec<Book> {
        self.books.clone()
    }
}

fn to_book_id(raw: i64) -> Result<BookId, SqliteBookStoreError> {
    BookId::try_from(raw).map_err(|_| SqliteBookStoreError::IdOutOfRange {
        id: i128::from(raw),
    })
}

fn load_books(connection: &Connection) -> Result<Vec<Book>, SqliteBookStoreError> {
    let mut statement = connection.prepare(SELECT_BOOKS_SQL)?;
    let mut rows = statement.query([])?;
    let mut books = Vec::new();
    while let Some(row) = rows.next()? {
        let book = read_book(row)?;
        book.validate()?;
        books.push(book);
    }
    Ok(books)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "ratings and percentages are small values stored as SQLite REAL"
)]
fn read_book(row: &Row<'_>) -> Result<Book, SqliteBookStoreError> {
    let id = to_book_id(row.get(0)?)?;
    let title: Option<String> = row.get(1)?;
    let author: Option<String> = row.get(2)?;
    let genres_json: Option<String> = row.get(3)?;
    let rating: Option<f64> = row.get(4)?;
    let liked_percentage: Option<f64> = row.get(5)?;
    let language: Option<String> = row.get(6)?;

    let genres = match genres_json {
        Some(raw) => parse_genres(id, &raw)?,
        None => Genres::new(),
    };

    Ok(Book::new(id, title.unwrap_or_default(), author.unwrap_or_default())
        .with_genres(genres)
        .with_rating(rating.unwrap_or(0.0) as f32)
        .with_liked_percentage(liked_percentage.unwrap_or(0.0) as f32)
        .with_language(language.unwrap_or_default()))
}

/// Decode a JSON genre array, skipping entries that are not strings.
fn parse_genres(id: BookId, raw: &str) -> Result<Genres, SqliteBookStoreError> {
    if raw.trim().is_empty() {
        return Ok(Genres::new());
    }
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|source| SqliteBookStoreError::InvalidGenres { id, source })?;
    let Some(entries) = value.as_array() else {
        warn!("Ignored genres for book {id}: expected a JSON array, found {value}");
        return Ok(Genres::new());
    };
    let mut genres = Genres::new();
    for entry in entries {
        match entry.as_str() {
            Some(name) => {
                genres.insert(name);
            }
            None => warn!("Skipped non-string genre entry {entry} on book {id}"),
        }
    }
    Ok(genres)
}
