use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use business::domain::cart::model::{Cart, CartCollection, CartItem};
use business::domain::shared::value_objects::{CartId, ProductId};

use crate::file_store::Document;
use crate::lenient;

#[derive(Debug, Clone, Serialize)]
pub struct CartItemEntity {
    pub product: u64,
    pub quantity: u32,
}

impl CartItemEntity {
    /// Quantities are clamped to at least 1.
    pub fn from_json(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let product = ProductId::from_json(record.get("product")?).ok()?;
        let quantity = lenient::integer(record, "quantity").clamp(1, u32::MAX as i64) as u32;

        Some(Self {
            product: product.value(),
            quantity,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartEntity {
    pub id: u64,
    pub products: Vec<CartItemEntity>,
}

impl CartEntity {
    pub fn from_json(value: &Value) -> Option<Self> {
        let id = CartId::from_json(value.as_object()?.get("id")?).ok()?;
        let products = lenient::records(value, "products")
            .iter()
            .filter_map(|line| {
                let item = CartItemEntity::from_json(line);
                if item.is_none() {
                    warn!(cart = id.value(), line = %line, "Skipping unreadable cart line");
                }
                item
            })
            .collect();

        Some(Self {
            id: id.value(),
            products,
        })
    }

    pub fn from_domain(cart: &Cart) -> Self {
        Self {
            id: cart.id.value(),
            products: cart
                .products
                .iter()
                .map(|item| CartItemEntity {
                    product: item.product_id.value(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            CartId::new(self.id),
            self.products
                .into_iter()
                .map(|item| CartItem {
                    product_id: ProductId::new(item.product),
                    quantity: item.quantity,
                })
                .collect(),
        )
    }
}

/// On-disk shape of `carts.json`.
#[derive(Debug, Default, Serialize)]
pub struct CartDocument {
    pub carts: Vec<CartEntity>,
    #[serde(rename = "lastId")]
    pub last_id: u64,
}

impl Document for CartDocument {
    fn from_json(value: Value) -> Self {
        let carts: Vec<CartEntity> = lenient::records(&value, "carts")
            .iter()
            .filter_map(|record| {
                let entity = CartEntity::from_json(record);
                if entity.is_none() {
                    warn!(record = %record, "Skipping unreadable cart record");
                }
                entity
            })
            .collect();
        let highest = carts.iter().map(|c| c.id).max().unwrap_or(0);

        Self {
            last_id: lenient::last_id(&value).max(highest),
            carts,
        }
    }
}

impl CartDocument {
    pub fn from_domain(carts: &CartCollection) -> Self {
        Self {
            carts: carts.items().iter().map(CartEntity::from_domain).collect(),
            last_id: carts.last_id(),
        }
    }

    pub fn into_domain(self) -> CartCollection {
        CartCollection::from_repository(
            self.carts.into_iter().map(|e| e.into_domain()).collect(),
            self.last_id,
        )
    }
}
