use crate::domain::errors::{ErrorKind, RepositoryError};
use crate::domain::shared::value_objects::CartId;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found: {id}")]
    NotFound { id: CartId },
    #[error("cart.invalid_product_id")]
    InvalidProductId,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::NotFound { .. } => ErrorKind::NotFound,
            CartError::InvalidProductId => ErrorKind::Validation,
            CartError::Repository(_) => ErrorKind::Storage,
        }
    }
}
