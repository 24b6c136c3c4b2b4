//! Author record.

use serde::Serialize;

/// Store-assigned author identity.
pub type AuthorId = i64;

/// Maximum author name length, in characters.
pub const AUTHOR_NAME_MAX_CHARS: usize = 150;

/// A persisted author.
///
/// `name` is stored trimmed and is unique across all authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

/// Author values not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
}

/// Canonical form used for storage and the uniqueness check.
pub fn normalize_author_name(name: &str) -> String {
    name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_author_name;

    #[test]
    fn normalization_trims_but_keeps_case() {
        assert_eq!(normalize_author_name("  Pablo Neruda  "), "Pablo Neruda");
        assert_eq!(normalize_author_name("\tJulio Cortázar\n"), "Julio Cortázar");
    }
}
