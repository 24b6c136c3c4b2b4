//! Book persistence port and SQLite implementation.
//!
//! # Responsibility
//! - Persist books as `(title, author_id, category_id)` rows.
//! - Always read books joined with their author and category.
//!
//! # Invariants
//! - Reads never return bare reference ids; both references are embedded.
//! - Writes pointing at missing authors/categories surface as
//!   `RepoError::ForeignKeyViolation`.

use super::category_repo::ensure_stored_name;
use super::schema::ensure_table_ready;
use super::{RepoError, RepoResult};
use crate::model::author::Author;
use crate::model::book::{Book, BookId, NewBook};
use crate::model::category::Category;
use rusqlite::{params, Connection, OptionalExtension, Row};

const TABLE: &str = "books";

const BOOK_SELECT_SQL: &str = "SELECT
    b.id AS book_id,
    b.title AS title,
    a.id AS author_id,
    a.name AS author_name,
    c.id AS category_id,
    c.name AS category_name
FROM books b
INNER JOIN authors a ON a.id = b.author_id
INNER JOIN categories c ON c.id = b.category_id";

/// Persistence port for books.
pub trait BookRepository {
    fn find_by_id(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// All books in ascending id order, references expanded.
    fn find_all(&self) -> RepoResult<Vec<Book>>;
    /// Persists a new book bound to already-resolved references.
    fn insert(&self, book: &NewBook) -> RepoResult<Book>;
    /// Overwrites title and reference bindings of an existing book.
    fn save(&self, book: &Book) -> RepoResult<Book>;
    fn delete(&self, book: &Book) -> RepoResult<()>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, TABLE, &["id", "title", "author_id", "category_id"])?;
        Ok(Self { conn })
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn find_by_id(&self, id: BookId) -> RepoResult<Option<Book>> {
        let book = self
            .conn
            .query_row(
                &format!("{BOOK_SELECT_SQL} WHERE b.id = ?1;"),
                [id],
                parse_book_row,
            )
            .optional()?;
        book.map(ensure_references_valid).transpose()
    }

    fn find_all(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY b.id ASC;"))?;
        let books = stmt
            .query_map([], parse_book_row)?
            .collect::<Result<Vec<_>, _>>()?;
        books.into_iter().map(ensure_references_valid).collect()
    }

    fn insert(&self, book: &NewBook) -> RepoResult<Book> {
        self.conn
            .execute(
                "INSERT INTO books (title, author_id, category_id) VALUES (?1, ?2, ?3);",
                params![book.title.as_str(), book.author.id, book.category.id],
            )
            .map_err(|err| RepoError::from_write(err, TABLE))?;

        Ok(Book {
            id: self.conn.last_insert_rowid(),
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
        })
    }

    fn save(&self, book: &Book) -> RepoResult<Book> {
        let changed = self
            .conn
            .execute(
                "UPDATE books
                 SET
                    title = ?1,
                    author_id = ?2,
                    category_id = ?3
                 WHERE id = ?4;",
                params![
                    book.title.as_str(),
                    book.author_id(),
                    book.category_id(),
                    book.id,
                ],
            )
            .map_err(|err| RepoError::from_write(err, TABLE))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: TABLE,
                id: book.id,
            });
        }

        Ok(book.clone())
    }

    fn delete(&self, book: &Book) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1;", [book.id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: TABLE,
                id: book.id,
            });
        }

        Ok(())
    }
}

fn ensure_references_valid(mut book: Book) -> RepoResult<Book> {
    book.category = ensure_stored_name(book.category)?;
    Ok(book)
}

fn parse_book_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get("book_id")?,
        title: row.get("title")?,
        author: Author {
            id: row.get("author_id")?,
            name: row.get("author_name")?,
        },
        category: Category {
            id: row.get("category_id")?,
            name: row.get("category_name")?,
        },
    })
}
