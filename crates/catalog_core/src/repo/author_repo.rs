//! Author persistence port and SQLite implementation.
//!
//! # Invariants
//! - `authors.name` carries a UNIQUE constraint; duplicate writes surface as
//!   `RepoError::UniqueViolation`.
//! - Deleting an author still referenced by books surfaces as
//!   `RepoError::ForeignKeyViolation`.

use super::schema::ensure_table_ready;
use super::{RepoError, RepoResult};
use crate::model::author::{Author, AuthorId, NewAuthor};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TABLE: &str = "authors";

/// Persistence port for authors.
pub trait AuthorRepository {
    /// Exact match on the stored (already normalized) name.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Author>>;
    fn find_by_id(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// All authors in ascending id order.
    fn find_all(&self) -> RepoResult<Vec<Author>>;
    /// Persists a new author and returns it with its assigned id.
    fn insert(&self, author: &NewAuthor) -> RepoResult<Author>;
    /// Overwrites an existing author, keeping its id.
    fn save(&self, author: &Author) -> RepoResult<Author>;
    fn delete(&self, author: &Author) -> RepoResult<()>;
}

/// Read-only existence lookup into the author store.
///
/// Book orchestration depends on this capability only, never on the full
/// author CRUD surface.
pub trait AuthorLookup {
    fn find_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
}

impl<T: AuthorRepository + ?Sized> AuthorLookup for T {
    fn find_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.find_by_id(id)
    }
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, TABLE, &["id", "name"])?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        let author = self
            .conn
            .query_row(
                "SELECT id, name FROM authors WHERE name = ?1;",
                [name],
                parse_author_row,
            )
            .optional()?;
        Ok(author)
    }

    fn find_by_id(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let author = self
            .conn
            .query_row(
                "SELECT id, name FROM authors WHERE id = ?1;",
                [id],
                parse_author_row,
            )
            .optional()?;
        Ok(author)
    }

    fn find_all(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM authors ORDER BY id ASC;")?;
        let authors = stmt
            .query_map([], parse_author_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(authors)
    }

    fn insert(&self, author: &NewAuthor) -> RepoResult<Author> {
        self.conn
            .execute(
                "INSERT INTO authors (name) VALUES (?1);",
                [author.name.as_str()],
            )
            .map_err(|err| RepoError::from_write(err, TABLE))?;

        Ok(Author {
            id: self.conn.last_insert_rowid(),
            name: author.name.clone(),
        })
    }

    fn save(&self, author: &Author) -> RepoResult<Author> {
        let changed = self
            .conn
            .execute(
                "UPDATE authors SET name = ?1 WHERE id = ?2;",
                params![author.name.as_str(), author.id],
            )
            .map_err(|err| RepoError::from_write(err, TABLE))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: TABLE,
                id: author.id,
            });
        }

        Ok(author.clone())
    }

    fn delete(&self, author: &Author) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", [author.id])
            .map_err(|err| RepoError::from_write(err, TABLE))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: TABLE,
                id: author.id,
            });
        }

        Ok(())
    }
}

fn parse_author_row(row: &Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
