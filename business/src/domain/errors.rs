/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// A missing or corrupt collection file is not an error: repositories heal it
/// to an empty collection. Everything else surfaces here and is not retried.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.directory_unavailable")]
    Directory { path: String, reason: String },
    #[error("repository.write_failed")]
    Write { path: String, reason: String },
    #[error("repository.serialization_failed")]
    Serialization { reason: String },
}

impl RepositoryError {
    pub fn directory(path: impl Into<String>, reason: impl ToString) -> Self {
        RepositoryError::Directory {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
    pub fn write(path: impl Into<String>, reason: impl ToString) -> Self {
        RepositoryError::Write {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
    pub fn serialization(reason: impl ToString) -> Self {
        RepositoryError::Serialization {
            reason: reason.to_string(),
        }
    }
}

/// Coarse classification shared by every store error, so callers can pick a
/// presentation (HTTP status, socket event) without matching each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Storage,
}
