//! Book manager.
//!
//! # Responsibility
//! - Resolve author/category references before any book write.
//! - Apply partial updates field by field.
//!
//! # Invariants
//! - Author existence is checked before category existence, so error
//!   reporting is deterministic when both are missing.
//! - No write is issued until every supplied reference resolves.
//! - Books returned from this service always embed both references.

use crate::model::author::{Author, AuthorId};
use crate::model::book::{normalize_book_title, Book, BookId, NewBook};
use crate::model::category::{Category, CategoryId};
use crate::model::input::{BookPatchInput, NewBookInput};
use crate::model::EntityKind;
use crate::repo::author_repo::AuthorLookup;
use crate::repo::book_repo::BookRepository;
use crate::repo::category_repo::CategoryLookup;
use crate::repo::RepoError;
use crate::service::{CatalogError, CatalogResult};
use log::{debug, info, warn};

/// Use-case service for book CRUD.
///
/// Holds its own store plus lookup-only handles into the author and
/// category stores.
pub struct BookService<B, A, C>
where
    B: BookRepository,
    A: AuthorLookup,
    C: CategoryLookup,
{
    books: B,
    authors: A,
    categories: C,
}

impl<B, A, C> BookService<B, A, C>
where
    B: BookRepository,
    A: AuthorLookup,
    C: CategoryLookup,
{
    pub fn new(books: B, authors: A, categories: C) -> Self {
        Self {
            books,
            authors,
            categories,
        }
    }

    /// Creates a book bound to an existing author and category.
    pub fn create(&self, input: &NewBookInput) -> CatalogResult<Book> {
        let author = self.resolve_author(input.author_id())?;
        let category = self.resolve_category(input.category_id())?;

        let new_book = NewBook {
            title: normalize_book_title(input.title()),
            author,
            category,
        };
        let book = self.books.insert(&new_book).map_err(|err| {
            self.explain_write_failure(err, new_book.author.id, new_book.category.id)
        })?;

        info!(
            "event=book_create module=service status=ok book_id={} author_id={} category_id={}",
            book.id,
            book.author_id(),
            book.category_id()
        );
        Ok(book)
    }

    pub fn find_all(&self) -> CatalogResult<Vec<Book>> {
        let books = self.books.find_all()?;
        debug!(
            "event=book_list module=service status=ok count={}",
            books.len()
        );
        Ok(books)
    }

    pub fn find_one(&self, id: BookId) -> CatalogResult<Book> {
        self.books
            .find_by_id(id)?
            .ok_or(CatalogError::not_found(EntityKind::Book, id))
    }

    /// Applies the supplied fields; absent fields keep their current value.
    pub fn update(&self, id: BookId, patch: &BookPatchInput) -> CatalogResult<Book> {
        let mut book = self.find_one(id)?;

        if let Some(title) = patch.title() {
            book.title = normalize_book_title(title);
        }
        if let Some(author_id) = patch.author_id() {
            book.author = self.resolve_author(author_id)?;
        }
        if let Some(category_id) = patch.category_id() {
            book.category = self.resolve_category(category_id)?;
        }

        let saved = self.books.save(&book).map_err(|err| match err {
            RepoError::NotFound { .. } => CatalogError::not_found(EntityKind::Book, id),
            other => self.explain_write_failure(other, book.author_id(), book.category_id()),
        })?;

        info!(
            "event=book_update module=service status=ok book_id={id} author_id={} category_id={}",
            saved.author_id(),
            saved.category_id()
        );
        Ok(saved)
    }

    /// Deletes a book. Referenced author and category are left untouched.
    pub fn remove(&self, id: BookId) -> CatalogResult<()> {
        let book = self.find_one(id)?;
        self.books
            .delete(&book)
            .map_err(|err| CatalogError::from_delete(err, EntityKind::Book, id))?;

        info!("event=book_remove module=service status=ok book_id={id}");
        Ok(())
    }

    fn resolve_author(&self, id: AuthorId) -> CatalogResult<Author> {
        self.authors.find_author(id)?.ok_or_else(|| {
            debug!("event=book_resolve module=service status=not_found author_id={id}");
            CatalogError::not_found(EntityKind::Author, id)
        })
    }

    fn resolve_category(&self, id: CategoryId) -> CatalogResult<Category> {
        self.categories.find_category(id)?.ok_or_else(|| {
            debug!("event=book_resolve module=service status=not_found category_id={id}");
            CatalogError::not_found(EntityKind::Category, id)
        })
    }

    /// A foreign-key rejection means a reference vanished after it was
    /// resolved; re-resolve to report which one.
    fn explain_write_failure(
        &self,
        err: RepoError,
        author_id: AuthorId,
        category_id: CategoryId,
    ) -> CatalogError {
        if !matches!(err, RepoError::ForeignKeyViolation { .. }) {
            return CatalogError::Repo(err);
        }

        warn!(
            "event=book_write module=service status=error reason=reference_vanished author_id={author_id} category_id={category_id}"
        );
        match self
            .resolve_author(author_id)
            .and_then(|_| self.resolve_category(category_id))
        {
            Err(not_found) => not_found,
            Ok(_) => CatalogError::Repo(err),
        }
    }
}
