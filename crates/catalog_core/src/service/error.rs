use crate::model::EntityKind;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Coarse failure class, kept distinct all the way to the response layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    Conflict,
    Internal,
}

/// Error returned by catalog managers.
#[derive(Debug)]
pub enum CatalogError {
    /// Target entity, or a referenced entity, does not exist.
    NotFound { kind: EntityKind, id: i64 },
    /// Another entity already holds the normalized name.
    DuplicateName { kind: EntityKind, name: String },
    /// Entity cannot be removed while books reference it.
    StillReferenced { kind: EntityKind, id: i64 },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl CatalogError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::DuplicateName { .. } | Self::StillReferenced { .. } => ErrorClass::Conflict,
            Self::Repo(_) => ErrorClass::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.class() == ErrorClass::NotFound
    }

    pub fn is_conflict(&self) -> bool {
        self.class() == ErrorClass::Conflict
    }

    pub(crate) fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }

    /// Maps a failed insert/save of an entity carrying `name`.
    pub(crate) fn from_write(err: RepoError, kind: EntityKind, name: &str) -> Self {
        match err {
            RepoError::UniqueViolation { .. } => Self::DuplicateName {
                kind,
                name: name.to_string(),
            },
            RepoError::NotFound { id, .. } => Self::NotFound { kind, id },
            other => Self::Repo(other),
        }
    }

    /// Maps a failed delete of entity `id`.
    pub(crate) fn from_delete(err: RepoError, kind: EntityKind, id: i64) -> Self {
        match err {
            RepoError::ForeignKeyViolation { .. } => Self::StillReferenced { kind, id },
            RepoError::NotFound { .. } => Self::NotFound { kind, id },
            other => Self::Repo(other),
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, .. } => write!(f, "{kind} not found"),
            Self::DuplicateName { kind, name } => write!(f, "{kind} '{name}' already exists"),
            Self::StillReferenced { kind, id } => {
                write!(f, "{kind} {id} is still referenced by existing books")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
