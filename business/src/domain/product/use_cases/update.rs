use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::shared::value_objects::ProductId;

/// Partial update. Only fields set in `fields` are merged; there is no way to
/// pass a new id.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub fields: ProductFields,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
