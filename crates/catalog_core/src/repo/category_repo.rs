//! Category persistence port and SQLite implementation.
//!
//! Names reach this layer already lowercased, so the plain UNIQUE constraint
//! on `categories.name` enforces case-insensitive uniqueness.

use super::schema::ensure_table_ready;
use super::{RepoError, RepoResult};
use crate::model::category::{Category, CategoryId, NewCategory};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TABLE: &str = "categories";

/// Persistence port for categories.
pub trait CategoryRepository {
    /// Exact match on the stored (already normalized) name.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>>;
    fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// All categories in ascending id order.
    fn find_all(&self) -> RepoResult<Vec<Category>>;
    fn insert(&self, category: &NewCategory) -> RepoResult<Category>;
    fn save(&self, category: &Category) -> RepoResult<Category>;
    fn delete(&self, category: &Category) -> RepoResult<()>;
}

/// Read-only existence lookup into the category store.
pub trait CategoryLookup {
    fn find_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
}

impl<T: CategoryRepository + ?Sized> CategoryLookup for T {
    fn find_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        self.find_by_id(id)
    }
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, TABLE, &["id", "name"])?;
        Ok(Self { conn })
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name FROM categories WHERE name = ?1;",
                [name],
                parse_category_row,
            )
            .optional()?;
        category.map(ensure_stored_name).transpose()
    }

    fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name FROM categories WHERE id = ?1;",
                [id],
                parse_category_row,
            )
            .optional()?;
        category.map(ensure_stored_name).transpose()
    }

    fn find_all(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id ASC;")?;
        let categories = stmt
            .query_map([], parse_category_row)?
            .collect::<Result<Vec<_>, _>>()?;
        categories.into_iter().map(ensure_stored_name).collect()
    }

    fn insert(&self, category: &NewCategory) -> RepoResult<Category> {
        self.conn
            .execute(
                "INSERT INTO categories (name) VALUES (?1);",
                [category.name.as_str()],
            )
            .map_err(|err| RepoError::from_write(err, TABLE))?;

        Ok(Category {
            id: self.conn.last_insert_rowid(),
            name: category.name.clone(),
        })
    }

    fn save(&self, category: &Category) -> RepoResult<Category> {
        let changed = self
            .conn
            .execute(
                "UPDATE categories SET name = ?1 WHERE id = ?2;",
                params![category.name.as_str(), category.id],
            )
            .map_err(|err| RepoError::from_write(err, TABLE))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: TABLE,
                id: category.id,
            });
        }

        Ok(category.clone())
    }

    fn delete(&self, category: &Category) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1;", [category.id])
            .map_err(|err| RepoError::from_write(err, TABLE))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: TABLE,
                id: category.id,
            });
        }

        Ok(())
    }
}

fn parse_category_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

/// Rejects rows written around the service layer with a non-lowercase name.
pub(super) fn ensure_stored_name(category: Category) -> RepoResult<Category> {
    if category.name != category.name.to_lowercase() {
        return Err(RepoError::InvalidData(format!(
            "category {} has a non-lowercase name in categories.name",
            category.id
        )));
    }
    Ok(category)
}
