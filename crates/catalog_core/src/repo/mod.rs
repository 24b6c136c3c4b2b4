//! Persistence port contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define one narrow repository contract per entity.
//! - Isolate SQL details from service orchestration.
//! - Translate storage constraint failures into semantic errors.
//!
//! # Invariants
//! - UNIQUE and FOREIGN KEY constraints in storage are the authoritative
//!   guards; they surface as `UniqueViolation` / `ForeignKeyViolation`.
//! - `save` and `delete` report `NotFound` when no row was touched.

pub mod author_repo;
pub mod book_repo;
pub mod category_repo;
mod error;
mod schema;

pub use error::{RepoError, RepoResult};
