use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let products = self.repository.load().await?;

        products
            .find(params.id)
            .cloned()
            .ok_or(ProductError::NotFound { id: params.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductCollection;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn load(&self) -> Result<ProductCollection, RepositoryError>;
            async fn save(&self, products: &ProductCollection) -> Result<(), RepositoryError>;
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

    fn stored() -> ProductCollection {
        ProductCollection::from_repository(
            vec![Product::from_repository(
                ProductId::new(4),
                "Fresh Salmon".to_string(),
                "200g fillet".to_string(),
                "SAL-200".to_string(),
                12.0,
                true,
                8,
                "fish".to_string(),
                vec!["/img/salmon.png".to_string()],
            )],
            4,
        )
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(stored()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let id: ProductId = "4".parse().unwrap();
        let result = use_case.execute(GetProductByIdParams { id }).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.title, "Fresh Salmon");
    }

    #[tokio::test]
    async fn should_return_error_when_product_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(stored()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(5),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ProductError::NotFound { .. }
        ));
    }
}
