use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::ErrorResponse;
use crate::api::product::dto::{CreateProductRequest, ProductEnvelope};

/// Frames sent by a realtime client: `{"event": "...", "data": ...}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    CreateProduct(CreateProductRequest),
    /// Product id as a number or numeric text.
    DeleteProduct(Value),
    JoinProducts,
}

/// Frames pushed to realtime clients. `ProductsUpdated` is the only event
/// fanned out to every subscriber; the rest answer the sender.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    ProductCreated(ProductEnvelope),
    ProductDeleted(ProductEnvelope),
    ProductError(ErrorResponse),
    ProductsUpdated,
}

impl ServerEvent {
    pub fn error(message: impl Into<String>) -> Self {
        ServerEvent::ProductError(ErrorResponse::new(message))
    }

    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_parse_create_product_frame() {
        let event: ClientEvent = serde_json::from_str(
            r#"{"event":"create-product","data":{"title":"Lamp","price":"12.5"}}"#,
        )
        .unwrap();

        match event {
            ClientEvent::CreateProduct(request) => {
                assert_eq!(request.title, Some(json!("Lamp")));
                assert_eq!(request.price, Some(json!("12.5")));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn should_parse_join_frame_without_data() {
        let event: ClientEvent = serde_json::from_str(r#"{"event":"join-products"}"#).unwrap();

        assert!(matches!(event, ClientEvent::JoinProducts));
    }

    #[test]
    fn should_keep_raw_id_when_parsing_delete_frame() {
        let event: ClientEvent =
            serde_json::from_str(r#"{"event":"delete-product","data":"7"}"#).unwrap();

        assert!(matches!(event, ClientEvent::DeleteProduct(Value::String(ref id)) if id == "7"));
    }

    #[test]
    fn should_reject_unknown_event() {
        let result = serde_json::from_str::<ClientEvent>(r#"{"event":"drop-table"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn should_serialize_update_without_data() {
        let frame = ServerEvent::ProductsUpdated.to_frame().unwrap();

        assert_eq!(frame, r#"{"event":"products-updated"}"#);
    }

    #[test]
    fn should_serialize_error_envelope() {
        let frame = ServerEvent::error("product.not_found: 3").to_frame().unwrap();
        let value: Value = serde_json::from_str(&frame).unwrap();

        assert_eq!(
            value,
            json!({
                "event": "product-error",
                "data": { "status": "error", "message": "product.not_found: 3" }
            })
        );
    }
}
