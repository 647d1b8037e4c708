use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::ProductCollection;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductDocument;
use crate::file_store::JsonFileStore;

pub struct ProductRepositoryJson {
    store: JsonFileStore,
}

impl ProductRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn load(&self) -> Result<ProductCollection, RepositoryError> {
        let document: ProductDocument = self.store.load().await?;
        Ok(document.into_domain())
    }

    async fn save(&self, products: &ProductCollection) -> Result<(), RepositoryError> {
        self.store
            .save(&ProductDocument::from_domain(products))
            .await
    }
}
