//! JSON response envelope printed once per invocation.

use catalog_core::{CatalogError, ErrorClass, InputError};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

/// Outcome class of a command, rendered as the numeric `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Created,
    NoContent,
    NotFound,
    Conflict,
    Unprocessable,
    Internal,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Unprocessable => 422,
            Self::Internal => 500,
        }
    }

    /// Process exit code; distinct per failure class so scripts can branch.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Ok | Self::Created | Self::NoContent => ExitCode::SUCCESS,
            Self::Internal => ExitCode::from(1),
            Self::Unprocessable => ExitCode::from(2),
            Self::NotFound => ExitCode::from(3),
            Self::Conflict => ExitCode::from(4),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl From<ErrorClass> for Status {
    fn from(value: ErrorClass) -> Self {
        match value {
            ErrorClass::NotFound => Self::NotFound,
            ErrorClass::Conflict => Self::Conflict,
            ErrorClass::Internal => Self::Internal,
        }
    }
}

/// `{ "status": 201, "message": "...", "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn with_data<T: Serialize>(
        status: Status,
        message: impl Into<String>,
        data: &T,
    ) -> Result<Self, CommandError> {
        let data = serde_json::to_value(data).map_err(CommandError::Encode)?;
        Ok(Self {
            status,
            message: message.into(),
            data: Some(data),
        })
    }

    pub fn empty(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    pub fn from_error(err: &CommandError) -> Self {
        Self::empty(err.status(), err.to_string())
    }

    pub fn exit_code(&self) -> ExitCode {
        self.status.exit_code()
    }
}

/// Failure of a single command, before it is rendered as an envelope.
#[derive(Debug)]
pub enum CommandError {
    /// Payload shape check failed.
    Input(InputError),
    /// Manager operation failed.
    Catalog(CatalogError),
    /// Response payload could not be serialized.
    Encode(serde_json::Error),
}

impl CommandError {
    pub fn status(&self) -> Status {
        match self {
            Self::Input(_) => Status::Unprocessable,
            Self::Catalog(err) => err.class().into(),
            Self::Encode(_) => Status::Internal,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode response: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<InputError> for CommandError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<CatalogError> for CommandError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<catalog_core::RepoError> for CommandError {
    fn from(value: catalog_core::RepoError) -> Self {
        Self::Catalog(CatalogError::Repo(value))
    }
}
