use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{EnvelopeStatus, ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductEnvelope, ProductListEnvelope, UpdateProductRequest,
};
use crate::api::realtime::channel::ProductUpdates;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    updates: ProductUpdates,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        updates: ProductUpdates,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            updates,
        }
    }
}

/// An id that is not an integer cannot name any product.
fn unknown_product(raw: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!("product.not_found: {}", raw)))
}

/// Product catalog API
///
/// Endpoints for listing, creating, updating and deleting products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in stored order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetAllProductsResponse::Ok(Json(ProductListEnvelope {
                status: EnvelopeStatus::Success,
                payload: products.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:pid", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, pid: Path<String>) -> GetProductByIdResponse {
        let Ok(id) = pid.0.parse::<ProductId>() else {
            return GetProductByIdResponse::NotFound(unknown_product(&pid.0));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(ProductEnvelope::success(product, None))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new product
    ///
    /// `title`, `description`, `code`, `price`, `stock` and `category` are
    /// required; `code` must not be used by another product.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            fields: body.0.into_fields(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => {
                self.updates.notify();
                CreateProductResponse::Created(Json(ProductEnvelope::success(
                    product,
                    Some("product.created"),
                )))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Merges the provided fields. An `id` in the body is ignored.
    #[oai(path = "/products/:pid", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        pid: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let Ok(id) = pid.0.parse::<ProductId>() else {
            return UpdateProductResponse::NotFound(unknown_product(&pid.0));
        };

        let params = UpdateProductParams {
            id,
            fields: body.0.into_fields(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => {
                self.updates.notify();
                UpdateProductResponse::Ok(Json(ProductEnvelope::success(
                    product,
                    Some("product.updated"),
                )))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the product and returns it.
    #[oai(path = "/products/:pid", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, pid: Path<String>) -> DeleteProductResponse {
        let Ok(id) = pid.0.parse::<ProductId>() else {
            return DeleteProductResponse::NotFound(unknown_product(&pid.0));
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(product) => {
                self.updates.notify();
                DeleteProductResponse::Ok(Json(ProductEnvelope::success(
                    product,
                    Some("product.deleted"),
                )))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
