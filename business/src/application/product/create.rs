use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info("Creating product");

        let mut products = self.repository.load().await?;
        let product = match products.add_product(params.fields) {
            Ok(product) => product,
            Err(err) => {
                self.logger
                    .warn(&format!("Product rejected: {}", err));
                return Err(err);
            }
        };

        self.repository.save(&products).await?;

        self.logger.info(&format!(
            "Product created with id: {} (code {})",
            product.id, product.code
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{ProductCollection, ProductFields};
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

    fn valid_fields(code: &str) -> ProductFields {
        ProductFields {
            title: Some("A".into()),
            description: Some("d".into()),
            code: Some(code.into()),
            price: Some("10".into()),
            stock: Some("5".into()),
            category: Some("c".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn should_create_product_with_next_id_when_fields_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(ProductCollection::empty()));
        mock_repo
            .expect_save()
            .withf(|products| products.last_id() == 1 && products.len() == 1)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                fields: valid_fields("X1"),
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, 10.0);
        assert_eq!(product.stock, 5);
        assert!(product.status);
        assert!(product.thumbnails.is_empty());
    }

    #[tokio::test]
    async fn should_not_persist_when_required_field_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(ProductCollection::empty()));
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut fields = valid_fields("X1");
        fields.stock = None;
        let result = use_case.execute(CreateProductParams { fields }).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ProductError::FieldRequired { field: "stock" }
        ));
    }

    #[tokio::test]
    async fn should_reject_product_when_code_already_exists() {
        let mut existing = ProductCollection::empty();
        existing.add_product(valid_fields("X1")).unwrap();

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(move || Ok(existing.clone()));
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                fields: valid_fields("X1"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::CodeDuplicated { .. }
        ));
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_save_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(ProductCollection::empty()));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::write("products.json", "disk full")));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                fields: valid_fields("X1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
