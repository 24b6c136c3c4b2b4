//! Book record.
//!
//! # Invariants
//! - `author` and `category` are resolved entities, never bare ids.
//! - `title` is stored trimmed; titles are not unique.

use super::author::{Author, AuthorId};
use super::category::{Category, CategoryId};
use serde::Serialize;

/// Store-assigned book identity.
pub type BookId = i64;

/// Maximum book title length, in characters.
pub const BOOK_TITLE_MAX_CHARS: usize = 200;

/// A persisted book with its references expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: Author,
    pub category: Category,
}

impl Book {
    pub fn author_id(&self) -> AuthorId {
        self.author.id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category.id
    }
}

/// Book values not yet persisted, bound to resolved references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: Author,
    pub category: Category,
}

/// Canonical form of a book title.
pub fn normalize_book_title(title: &str) -> String {
    title.trim().to_string()
}
