//! Catalog domain model.
//!
//! # Responsibility
//! - Define the records owned by the catalog store.
//! - Define typed, already-checked inputs accepted by the services.
//!
//! # Invariants
//! - Every record is identified by a store-assigned integer id.
//! - A `Book` always embeds its `Author` and `Category` by value.

pub mod author;
pub mod book;
pub mod category;
pub mod input;

/// Kind of catalog entity, carried by errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Author,
    Category,
    Book,
}

impl EntityKind {
    /// User-facing entity label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Category => "Category",
            Self::Book => "Book",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
