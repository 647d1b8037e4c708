use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

use crate::api::error::EnvelopeStatus;

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product id
    pub product: u64,
    pub quantity: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product: item.product_id.value(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub id: u64,
    pub products: Vec<CartItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.value(),
            products: cart.products.into_iter().map(|i| i.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartEnvelope {
    pub status: EnvelopeStatus,
    pub message: String,
    pub payload: CartResponse,
}

impl CartEnvelope {
    pub fn success(cart: Cart, message: &str) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.to_string(),
            payload: cart.into(),
        }
    }
}

/// `GET /carts/:cid` answers with the cart's product lines only.
#[derive(Debug, Clone, Object)]
pub struct CartItemsEnvelope {
    pub status: EnvelopeStatus,
    pub payload: Vec<CartItemResponse>,
}

impl CartItemsEnvelope {
    pub fn success(cart: Cart) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            payload: cart.products.into_iter().map(|i| i.into()).collect(),
        }
    }
}
