use rocket::{http::Status, response::Responder};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds every registry operation can surface.
/// The HTTP layer maps each kind to a distinct status via [`Responder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Required input missing or a referenced record does not exist.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Uniqueness violation (national ID or phone already in use).
    #[error("Conflict: {0}")]
    Conflict(String),
    /// The operation targets a nonexistent record.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Unexpected failure inside the registry; never silently swallowed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::NotFound(what.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = match &self {
            Self::Validation(_) => Status::BadRequest,
            Self::Conflict(_) => Status::Conflict,
            Self::NotFound(_) => Status::NotFound,
            Self::Internal(_) => Status::InternalServerError,
        };
        match status.class() {
            rocket::http::StatusClass::ServerError => log::error!("{self}"),
            _ => log::warn!("{self}"),
        }
        Err(status)
    }
}
