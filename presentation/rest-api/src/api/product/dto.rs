use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::product::model::{Product, ProductFields};
use business::domain::shared::value_objects::Scalar;

use crate::api::error::EnvelopeStatus;

/// Product fields as sent by forms and clients. Values are loosely typed:
/// `price` may arrive as `10` or `"10"`, and are coerced by the store.
#[derive(Debug, Clone, Default, Object, Deserialize)]
pub struct CreateProductRequest {
    /// Product title (required)
    pub title: Option<Value>,
    /// Description (required)
    pub description: Option<Value>,
    /// Unique product code (required)
    pub code: Option<Value>,
    /// Price, numeric or numeric text (required)
    pub price: Option<Value>,
    /// Units in stock, integral (required)
    pub stock: Option<Value>,
    /// Category (required)
    pub category: Option<Value>,
    /// Availability flag, defaults to true
    pub status: Option<Value>,
    /// Image URLs; anything other than a list is treated as empty
    pub thumbnails: Option<Value>,
}

/// Partial update. Fields left out or set to `null` are not modified.
#[derive(Debug, Clone, Default, Object, Deserialize)]
pub struct UpdateProductRequest {
    /// Ignored: ids are assigned on creation and never change
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub code: Option<Value>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
    pub category: Option<Value>,
    pub status: Option<Value>,
    pub thumbnails: Option<Value>,
}

fn scalar(value: Option<Value>) -> Option<Scalar> {
    value.and_then(Scalar::from_json)
}

impl CreateProductRequest {
    pub fn into_fields(self) -> ProductFields {
        ProductFields {
            title: scalar(self.title),
            description: scalar(self.description),
            code: scalar(self.code),
            price: scalar(self.price),
            stock: scalar(self.stock),
            category: scalar(self.category),
            status: scalar(self.status),
            thumbnails: self.thumbnails.filter(|t| !t.is_null()),
        }
    }
}

impl UpdateProductRequest {
    pub fn into_fields(self) -> ProductFields {
        ProductFields {
            title: scalar(self.title),
            description: scalar(self.description),
            code: scalar(self.code),
            price: scalar(self.price),
            stock: scalar(self.stock),
            category: scalar(self.category),
            status: scalar(self.status),
            thumbnails: self.thumbnails.filter(|t| !t.is_null()),
        }
    }
}

#[derive(Debug, Clone, Object, Serialize)]
pub struct ProductResponse {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: i64,
    pub category: String,
    pub thumbnails: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title,
            description: product.description,
            code: product.code,
            price: product.price,
            status: product.status,
            stock: product.stock,
            category: product.category,
            thumbnails: product.thumbnails,
        }
    }
}

#[derive(Debug, Clone, Object, Serialize)]
pub struct ProductEnvelope {
    pub status: EnvelopeStatus,
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub payload: ProductResponse,
}

impl ProductEnvelope {
    pub fn success(product: Product, message: Option<&str>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.map(str::to_string),
            payload: product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListEnvelope {
    pub status: EnvelopeStatus,
    pub payload: Vec<ProductResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_drop_id_when_converting_update_request() {
        let request: UpdateProductRequest =
            serde_json::from_value(json!({ "id": 99, "title": "Renamed" })).unwrap();

        let fields = request.into_fields();

        assert_eq!(fields.title, Some(Scalar::from("Renamed")));
        assert!(fields.code.is_none());
        assert!(fields.price.is_none());
    }

    #[test]
    fn should_treat_null_as_not_provided() {
        let request: UpdateProductRequest =
            serde_json::from_value(json!({ "price": null, "thumbnails": null })).unwrap();

        let fields = request.into_fields();

        assert!(fields.price.is_none());
        assert!(fields.thumbnails.is_none());
    }

    #[test]
    fn should_keep_loose_values_when_converting_create_request() {
        let request: CreateProductRequest = serde_json::from_value(json!({
            "title": "A",
            "price": "10",
            "stock": 5,
            "thumbnails": ["a.png"]
        }))
        .unwrap();

        let fields = request.into_fields();

        assert_eq!(fields.price, Some(Scalar::from("10")));
        assert_eq!(fields.stock, Some(Scalar::Number(5.0)));
        assert_eq!(fields.thumbnails, Some(json!(["a.png"])));
        assert!(fields.description.is_none());
    }
}
