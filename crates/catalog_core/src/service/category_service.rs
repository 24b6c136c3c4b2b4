//! Category manager.
//!
//! Same contract as the author manager, except names are compared and
//! stored case-insensitively (trimmed + lowercased).

use crate::model::category::{normalize_category_name, Category, CategoryId, NewCategory};
use crate::model::input::CategoryInput;
use crate::model::EntityKind;
use crate::repo::category_repo::CategoryRepository;
use crate::service::{CatalogError, CatalogResult};
use log::{debug, info, warn};

const KIND: EntityKind = EntityKind::Category;

/// Use-case service for category CRUD.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a category; "Historia" collides with an existing "historia".
    pub fn create(&self, input: &CategoryInput) -> CatalogResult<Category> {
        let name = normalize_category_name(input.name());
        self.ensure_name_available(&name, None)?;

        let category = self
            .repo
            .insert(&NewCategory { name: name.clone() })
            .map_err(|err| CatalogError::from_write(err, KIND, &name))?;

        info!(
            "event=category_create module=service status=ok category_id={}",
            category.id
        );
        Ok(category)
    }

    pub fn find_all(&self) -> CatalogResult<Vec<Category>> {
        let categories = self.repo.find_all()?;
        debug!(
            "event=category_list module=service status=ok count={}",
            categories.len()
        );
        Ok(categories)
    }

    pub fn find_one(&self, id: CategoryId) -> CatalogResult<Category> {
        self.repo
            .find_by_id(id)?
            .ok_or(CatalogError::not_found(KIND, id))
    }

    pub fn update(&self, id: CategoryId, name: Option<&CategoryInput>) -> CatalogResult<Category> {
        let mut category = self.find_one(id)?;

        if let Some(input) = name {
            let name = normalize_category_name(input.name());
            self.ensure_name_available(&name, Some(id))?;
            category.name = name;
        }

        let saved = self
            .repo
            .save(&category)
            .map_err(|err| CatalogError::from_write(err, KIND, &category.name))?;

        info!("event=category_update module=service status=ok category_id={id}");
        Ok(saved)
    }

    /// Deletes a category. Fails with `StillReferenced` while books point at it.
    pub fn remove(&self, id: CategoryId) -> CatalogResult<()> {
        let category = self.find_one(id)?;

        self.repo.delete(&category).map_err(|err| {
            let err = CatalogError::from_delete(err, KIND, id);
            if err.is_conflict() {
                warn!("event=category_remove module=service status=conflict reason=still_referenced category_id={id}");
            }
            err
        })?;

        info!("event=category_remove module=service status=ok category_id={id}");
        Ok(())
    }

    fn ensure_name_available(&self, name: &str, owner: Option<CategoryId>) -> CatalogResult<()> {
        match self.repo.find_by_name(name)? {
            Some(existing) if Some(existing.id) != owner => {
                warn!(
                    "event=category_name_check module=service status=conflict reason=duplicate_name existing_id={}",
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
