use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryJson;
use persistence::product::repository::ProductRepositoryJson;

use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::get_by_id::GetCartByIdUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::realtime::channel::{ProductUpdates, RealtimeChannel};
use crate::config::realtime_config::RealtimeConfig;
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
    pub realtime_channel: RealtimeChannel,
}

impl DependencyContainer {
    pub fn new(storage: &StorageConfig, realtime: &RealtimeConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryJson::new(storage.products_file.clone()));
        let cart_repository = Arc::new(CartRepositoryJson::new(storage.carts_file.clone()));

        let updates = ProductUpdates::new(realtime.channel_capacity);

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartByIdUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductToCartUseCaseImpl {
            repository: cart_repository,
            logger,
        });

        let realtime_channel =
            RealtimeChannel::new(create_use_case.clone(), delete_use_case.clone(), updates.clone());

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            updates,
        );

        let cart_api = CartApi::new(create_cart_use_case, get_cart_use_case, add_product_use_case);

        Self {
            health_api,
            product_api,
            cart_api,
            realtime_channel,
        }
    }
}
