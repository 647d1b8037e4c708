use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetCartByIdUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartByIdUseCase for GetCartByIdUseCaseImpl {
    async fn execute(&self, params: GetCartByIdParams) -> Result<Cart, CartError> {
        self.logger
            .debug(&format!("Fetching cart by id: {}", params.id));

        let carts = self.repository.load().await?;

        carts
            .find(params.id)
            .cloned()
            .ok_or(CartError::NotFound { id: params.id })
    }
}
