//! Typed, already-checked service inputs.
//!
//! # Responsibility
//! - Check payload shape (blank values, length limits, id ranges) once, before
//!   any service call.
//! - Hand services values they can trust without re-validating shape.
//!
//! # Invariants
//! - Inputs can only be built through `parse`, so every instance is valid.
//! - Length limits are counted in characters on the trimmed value.
//! - Inputs keep the caller's raw text; services own normalization.

use super::author::{AuthorId, AUTHOR_NAME_MAX_CHARS};
use super::book::BOOK_TITLE_MAX_CHARS;
use super::category::{CategoryId, CATEGORY_NAME_MAX_CHARS};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shape violation detected before a request reaches a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Value is empty or whitespace only.
    Blank { field: &'static str },
    /// Value exceeds the column limit.
    TooLong {
        field: &'static str,
        max_chars: usize,
        actual_chars: usize,
    },
    /// Identifier is zero or negative.
    NonPositiveId { field: &'static str, value: i64 },
}

impl InputError {
    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Blank { field }
            | Self::TooLong { field, .. }
            | Self::NonPositiveId { field, .. } => field,
        }
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank { field } => write!(f, "{field} must not be empty"),
            Self::TooLong {
                field,
                max_chars,
                actual_chars,
            } => write!(
                f,
                "{field} must be at most {max_chars} characters, got {actual_chars}"
            ),
            Self::NonPositiveId { field, value } => {
                write!(f, "{field} must be a positive integer, got {value}")
            }
        }
    }
}

impl Error for InputError {}

/// Checked author name for create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInput {
    name: String,
}

impl AuthorInput {
    pub fn parse(name: impl Into<String>) -> Result<Self, InputError> {
        let name = name.into();
        check_text("name", &name, AUTHOR_NAME_MAX_CHARS)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Checked category name for create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    name: String,
}

impl CategoryInput {
    pub fn parse(name: impl Into<String>) -> Result<Self, InputError> {
        let name = name.into();
        check_text("name", &name, CATEGORY_NAME_MAX_CHARS)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Checked payload for book creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookInput {
    title: String,
    author_id: AuthorId,
    category_id: CategoryId,
}

impl NewBookInput {
    pub fn parse(
        title: impl Into<String>,
        author_id: i64,
        category_id: i64,
    ) -> Result<Self, InputError> {
        let title = title.into();
        check_text("title", &title, BOOK_TITLE_MAX_CHARS)?;
        check_id("authorId", author_id)?;
        check_id("categoryId", category_id)?;
        Ok(Self {
            title,
            author_id,
            category_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }
}

/// Checked partial update for a book. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPatchInput {
    title: Option<String>,
    author_id: Option<AuthorId>,
    category_id: Option<CategoryId>,
}

impl BookPatchInput {
    pub fn parse(
        title: Option<String>,
        author_id: Option<i64>,
        category_id: Option<i64>,
    ) -> Result<Self, InputError> {
        if let Some(title) = title.as_deref() {
            check_text("title", title, BOOK_TITLE_MAX_CHARS)?;
        }
        if let Some(author_id) = author_id {
            check_id("authorId", author_id)?;
        }
        if let Some(category_id) = category_id {
            check_id("categoryId", category_id)?;
        }
        Ok(Self {
            title,
            author_id,
            category_id,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author_id(&self) -> Option<AuthorId> {
        self.author_id
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }
}

fn check_text(field: &'static str, value: &str, max_chars: usize) -> Result<(), InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank { field });
    }
    let actual_chars = trimmed.chars().count();
    if actual_chars > max_chars {
        return Err(InputError::TooLong {
            field,
            max_chars,
            actual_chars,
        });
    }
    Ok(())
}

fn check_id(field: &'static str, value: i64) -> Result<(), InputError> {
    if value < 1 {
        return Err(InputError::NonPositiveId { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AuthorInput, BookPatchInput, CategoryInput, InputError, NewBookInput};

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            AuthorInput::parse("   ").unwrap_err(),
            InputError::Blank { field: "name" }
        );
        assert_eq!(
            CategoryInput::parse("").unwrap_err(),
            InputError::Blank { field: "name" }
        );
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        // 150 two-byte characters still fit.
        let name = "é".repeat(150);
        assert!(AuthorInput::parse(name).is_ok());

        let err = CategoryInput::parse("x".repeat(101)).unwrap_err();
        assert_eq!(
            err,
            InputError::TooLong {
                field: "name",
                max_chars: 100,
                actual_chars: 101,
            }
        );
    }

    #[test]
    fn surrounding_whitespace_does_not_count_toward_limit() {
        let padded = format!("  {}  ", "a".repeat(150));
        let input = AuthorInput::parse(padded.clone()).unwrap();
        assert_eq!(input.name(), padded);
    }

    #[test]
    fn new_book_requires_positive_ids() {
        let err = NewBookInput::parse("Rayuela", 0, 1).unwrap_err();
        assert_eq!(err.field(), "authorId");

        let err = NewBookInput::parse("Rayuela", 1, -4).unwrap_err();
        assert_eq!(
            err,
            InputError::NonPositiveId {
                field: "categoryId",
                value: -4,
            }
        );
    }

    #[test]
    fn book_patch_checks_only_present_fields() {
        let patch = BookPatchInput::parse(None, Some(2), None).unwrap();
        assert_eq!(patch.author_id(), Some(2));
        assert!(patch.title().is_none());
        assert_eq!(patch.category_id(), None);

        let err = BookPatchInput::parse(Some(" ".to_string()), None, None).unwrap_err();
        assert_eq!(err, InputError::Blank { field: "title" });
    }
}
