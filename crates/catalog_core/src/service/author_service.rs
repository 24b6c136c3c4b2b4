//! Author manager.
//!
//! # Invariants
//! - Stored names are trimmed; two authors never share a trimmed name.
//! - The name pre-check only improves error reporting; the storage UNIQUE
//!   constraint decides races and maps to the same `DuplicateName` error.

use crate::model::author::{normalize_author_name, Author, AuthorId, NewAuthor};
use crate::model::input::AuthorInput;
use crate::model::EntityKind;
use crate::repo::author_repo::AuthorRepository;
use crate::service::{CatalogError, CatalogResult};
use log::{debug, info, warn};

const KIND: EntityKind = EntityKind::Author;

/// Use-case service for author CRUD.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an author with a trimmed, unique name.
    pub fn create(&self, input: &AuthorInput) -> CatalogResult<Author> {
        let name = normalize_author_name(input.name());
        self.ensure_name_available(&name, None)?;

        let author = self
            .repo
            .insert(&NewAuthor { name: name.clone() })
            .map_err(|err| CatalogError::from_write(err, KIND, &name))?;

        info!(
            "event=author_create module=service status=ok author_id={}",
            author.id
        );
        Ok(author)
    }

    pub fn find_all(&self) -> CatalogResult<Vec<Author>> {
        let authors = self.repo.find_all()?;
        debug!(
            "event=author_list module=service status=ok count={}",
            authors.len()
        );
        Ok(authors)
    }

    pub fn find_one(&self, id: AuthorId) -> CatalogResult<Author> {
        self.repo
            .find_by_id(id)?
            .ok_or(CatalogError::not_found(KIND, id))
    }

    /// Renames an author when `name` is supplied; otherwise re-saves it as is.
    pub fn update(&self, id: AuthorId, name: Option<&AuthorInput>) -> CatalogResult<Author> {
        let mut author = self.find_one(id)?;

        if let Some(input) = name {
            let name = normalize_author_name(input.name());
            self.ensure_name_available(&name, Some(id))?;
            author.name = name;
        }

        let saved = self
            .repo
            .save(&author)
            .map_err(|err| CatalogError::from_write(err, KIND, &author.name))?;

        info!("event=author_update module=service status=ok author_id={id}");
        Ok(saved)
    }

    /// Deletes an author. Fails with `StillReferenced` while books point at it.
    pub fn remove(&self, id: AuthorId) -> CatalogResult<()> {
        let author = self.find_one(id)?;

        self.repo.delete(&author).map_err(|err| {
            let err = CatalogError::from_delete(err, KIND, id);
            if err.is_conflict() {
                warn!("event=author_remove module=service status=conflict reason=still_referenced author_id={id}");
            }
            err
        })?;

        info!("event=author_remove module=service status=ok author_id={id}");
        Ok(())
    }

    fn ensure_name_available(&self, name: &str, owner: Option<AuthorId>) -> CatalogResult<()> {
        match self.repo.find_by_name(name)? {
            Some(existing) if Some(existing.id) != owner => {
                warn!(
                    "event=author_name_check module=service status=conflict reason=duplicate_name existing_id={}",
                    existing.id
                );
                Err(CatalogError::DuplicateName {
                    kind: KIND,
                    name: name.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
