use rusqlite::ErrorCode;
use thiserror::Error;

/// Failure kinds surfaced by the record and aggregate services
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &str, key: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("{entity} {key} not found"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }
}

/// Turn a storage failure into `Conflict` when SQLite rejected it on a
/// constraint, otherwise keep it internal.
pub fn constraint_as_conflict(err: anyhow::Error, message: &str) -> AppError {
    if is_constraint_violation(&err) {
        AppError::Conflict(message.to_string())
    } else {
        AppError::Internal(err)
    }
}

fn is_constraint_violation(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<rusqlite::Error>(),
            Some(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation
        )
    })
}
