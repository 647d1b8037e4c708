use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ProductCollection;

/// Whole-collection storage port. Every store operation loads the full
/// collection, works on it in memory and saves it back.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Never fails for a missing or corrupt document: it is reset to empty.
    async fn load(&self) -> Result<ProductCollection, RepositoryError>;
    async fn save(&self, products: &ProductCollection) -> Result<(), RepositoryError>;
}
