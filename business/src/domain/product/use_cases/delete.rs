use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Returns the removed product.
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
}
