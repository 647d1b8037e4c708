use crate::domain::errors::{ErrorKind, RepositoryError};
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.field_required: {field}")]
    FieldRequired { field: &'static str },
    #[error("product.invalid_number: {field}")]
    InvalidNumber { field: &'static str },
    #[error("product.code_duplicated: {code}")]
    CodeDuplicated { code: String, existing_id: ProductId },
    #[error("product.not_found: {id}")]
    NotFound { id: ProductId },
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::FieldRequired { .. } | ProductError::InvalidNumber { .. } => {
                ErrorKind::Validation
            }
            ProductError::CodeDuplicated { .. } => ErrorKind::Conflict,
            ProductError::NotFound { .. } => ErrorKind::NotFound,
            ProductError::Repository(_) => ErrorKind::Storage,
        }
    }
}
