use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::CartCollection;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<CartCollection, RepositoryError>;
    async fn save(&self, carts: &CartCollection) -> Result<(), RepositoryError>;
}
