//! Category record.
//!
//! Category names are case-insensitive: the stored value is the trimmed,
//! lowercased form, so "Historia" and "historia" collide.

use serde::Serialize;

/// Store-assigned category identity.
pub type CategoryId = i64;

/// Maximum category name length, in characters.
pub const CATEGORY_NAME_MAX_CHARS: usize = 100;

/// A persisted category. `name` is always trimmed and lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Category values not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

/// Canonical form used for storage and the uniqueness check.
pub fn normalize_category_name(name: &str) -> String {
    name.trim().to_lowercase()
}
