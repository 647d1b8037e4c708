use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use business::domain::shared::value_objects::{CartId, ProductId};

use crate::api::cart::dto::{CartEnvelope, CartItemsEnvelope};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            add_product_use_case,
        }
    }
}

fn unknown_cart(raw: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!("cart.not_found: {}", raw)))
}

/// Shopping cart API
#[OpenApi]
impl CartApi {
    /// Create an empty cart
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => {
                CreateCartResponse::Created(Json(CartEnvelope::success(cart, "cart.created")))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// List the products of a cart
    ///
    /// Returns the cart's product lines (`product` id and `quantity`).
    #[oai(path = "/carts/:cid", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_products(&self, cid: Path<String>) -> GetCartResponse {
        let Ok(id) = cid.0.parse::<CartId>() else {
            return GetCartResponse::NotFound(unknown_cart(&cid.0));
        };

        match self
            .get_by_id_use_case
            .execute(GetCartByIdParams { id })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(CartItemsEnvelope::success(cart))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a cart
    ///
    /// Adding a product already in the cart increments its quantity. The
    /// product id is not checked against the catalog.
    #[oai(
        path = "/carts/:cid/product/:pid",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_product(&self, cid: Path<String>, pid: Path<String>) -> AddProductResponse {
        let Ok(cart_id) = cid.0.parse::<CartId>() else {
            return AddProductResponse::NotFound(unknown_cart(&cid.0));
        };
        let Ok(product_id) = pid.0.parse::<ProductId>() else {
            let (_status, json) = CartError::InvalidProductId.into_error_response();
            return AddProductResponse::BadRequest(json);
        };

        let params = AddProductToCartParams {
            cart_id,
            product_id,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(cart) => {
                AddProductResponse::Ok(Json(CartEnvelope::success(cart, "cart.product_added")))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductResponse::BadRequest(json),
                    404 => AddProductResponse::NotFound(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemsEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
