//! Catalog managers: one use-case service per entity.
//!
//! # Responsibility
//! - Enforce business invariants (uniqueness, referential integrity) on every
//!   mutation.
//! - Normalize free-text fields before they reach storage.
//! - Report failures as `CatalogError` with entity context.
//!
//! # Invariants
//! - Services never re-validate input shape; they accept checked inputs from
//!   `model::input`.
//! - Services hold no state besides their repository handles.

pub mod author_service;
pub mod book_service;
pub mod category_service;
mod error;

pub use error::{CatalogError, CatalogResult, ErrorClass};
