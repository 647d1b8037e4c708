use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use crate::domain::logger::Logger;

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart {}",
            params.product_id, params.cart_id
        ));

        let mut carts = self.repository.load().await?;
        let cart = carts.add_to_cart(params.cart_id, params.product_id)?;

        self.repository.save(&carts).await?;

        self.logger.info(&format!(
            "Cart {} now holds {} of product {}",
            cart.id,
            cart.quantity_of(params.product_id),
            params.product_id
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartCollection;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{CartId, ProductId};
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<CartCollection, RepositoryError>;
            async fn save(&self, carts: &CartCollection) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_merge_lines_when_same_product_added_twice() {
        // Shared file stand-in: every save becomes the next load.
        let state = Arc::new(Mutex::new(CartCollection::from_repository(
            vec![Cart::new(CartId::new(1))],
            1,
        )));
        let load_state = state.clone();
        let save_state = state.clone();

        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(move || Ok(load_state.lock().unwrap().clone()));
        mock_repo.expect_save().times(2).returning(move |carts| {
            *save_state.lock().unwrap() = carts.clone();
            Ok(())
        });

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        for _ in 0..2 {
            use_case
                .execute(AddProductToCartParams {
                    cart_id: CartId::new(1),
                    product_id: ProductId::new(8),
                })
                .await
                .unwrap();
        }

        let carts = state.lock().unwrap();
        let cart = carts.find(CartId::new(1)).unwrap();
        assert_eq!(cart.products.len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(8)), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_cart_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(CartCollection::empty()));
        mock_repo.expect_save().never();

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddProductToCartParams {
                cart_id: CartId::new(4),
                product_id: ProductId::new(1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound { .. }));
    }
}
