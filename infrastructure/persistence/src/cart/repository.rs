use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::cart::model::CartCollection;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartDocument;
use crate::file_store::JsonFileStore;

pub struct CartRepositoryJson {
    store: JsonFileStore,
}

impl CartRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryJson {
    async fn load(&self) -> Result<CartCollection, RepositoryError> {
        let document: CartDocument = self.store.load().await?;
        Ok(document.into_domain())
    }

    async fn save(&self, carts: &CartCollection) -> Result<(), RepositoryError> {
        self.store.save(&CartDocument::from_domain(carts)).await
    }
}
