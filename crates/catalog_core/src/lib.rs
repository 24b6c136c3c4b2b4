//! Core domain logic for the library catalog.
//! This crate is the single source of truth for catalog invariants:
//! name uniqueness, book reference integrity and text normalization.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::author::{Author, AuthorId, NewAuthor};
pub use model::book::{Book, BookId, NewBook};
pub use model::category::{Category, CategoryId, NewCategory};
pub use model::input::{AuthorInput, BookPatchInput, CategoryInput, InputError, NewBookInput};
pub use model::EntityKind;
pub use repo::author_repo::{AuthorLookup, AuthorRepository, SqliteAuthorRepository};
pub use repo::book_repo::{BookRepository, SqliteBookRepository};
pub use repo::category_repo::{CategoryLookup, CategoryRepository, SqliteCategoryRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::book_service::BookService;
pub use service::category_service::CategoryService;
pub use service::{CatalogError, CatalogResult, ErrorClass};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
