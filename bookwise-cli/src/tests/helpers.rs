//! Test helpers for seeding catalog databases and temporary workspaces.

use bookwise_core::test_support::{SeedBook, write_catalog_database};
use camino::{Utf8Path, Utf8PathBuf};
use rusqlite::Connection;
use tempfile::TempDir;

/// Reader with favourite genres, a saved book, and a language preference.
pub(super) const RETURNING_READER: u64 = 7;
/// Reader without any preference signal.
pub(super) const NEW_READER: u64 = 8;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write the shared fixture catalog to `books.db` and return its path.
    pub(super) fn seed_catalog(&self) -> Utf8PathBuf {
        let path = self.path("books.db");
        seed_catalog_at(&path);
        path
    }
}

/// Five books and two readers.
///
/// Reader 7 likes fantasy and mystery, reads English, and saved book 1.
/// Reader 8 has no preferences.
pub(super) fn seed_catalog_at(path: &Utf8Path) {
    let connection = Connection::open(path.as_std_path()).expect("open catalog database");
    write_catalog_database(
        &connection,
        &[
            SeedBook::new(
                1,
                "The Hobbit",
                "J. R. R. Tolkien",
                r#"["Fantasy","Adventure"]"#,
                4.3,
                93.0,
                "English",
            ),
            SeedBook::new(
                2,
                "The Silmarillion",
                "J. R. R. Tolkien",
                r#"["Fantasy","Mythology"]"#,
                3.9,
                81.0,
                "English",
            ),
            SeedBook::new(
                3,
                "Gone Girl",
                "Gillian Flynn",
                r#"["Mystery","Thriller"]"#,
                4.1,
                88.0,
                "English",
            ),
            SeedBook::new(
                4,
                "Le Petit Prince",
                "Antoine de Saint-Exupéry",
                r#"["Fantasy","Classics"]"#,
                4.3,
                95.0,
                "French",
            ),
            SeedBook::new(
                5,
                "Pride and Prejudice",
                "Jane Austen",
                r#"["Romance","Classics"]"#,
                4.6,
                94.0,
                "English",
            ),
        ],
    )
    .expect("seed books");
    connection
        .execute_batch(
            "INSERT INTO users (id, preferred_language) VALUES (7, 'English'), (8, NULL);
             INSERT INTO user_favorite_genres (user_id, genre) VALUES (7, 'Fantasy'), (7, 'Mystery');
             INSERT INTO user_saved_books (user_id, book_id, position) VALUES (7, 1, 0);",
        )
        .expect("seed readers");
}
