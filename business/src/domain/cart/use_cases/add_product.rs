use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{CartId, ProductId};

pub struct AddProductToCartParams {
    pub cart_id: CartId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    /// Returns the whole cart after the change.
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError>;
}
