use std::sync::Arc;

use futures_util::{Sink, SinkExt, StreamExt};
use poem::web::websocket::{Message, WebSocketStream};
use tokio::sync::broadcast::{self, error::RecvError};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::product::dto::ProductEnvelope;
use crate::api::realtime::events::{ClientEvent, ServerEvent};

/// Fan-out of catalog change notifications to every connected client.
#[derive(Clone)]
pub struct ProductUpdates {
    sender: broadcast::Sender<ServerEvent>,
}

impl ProductUpdates {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn notify(&self) {
        match self.sender.send(ServerEvent::ProductsUpdated) {
            Ok(subscribers) => tracing::debug!(subscribers, "Broadcast products-updated"),
            Err(_) => tracing::debug!("No realtime subscribers to notify"),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }
}

#[derive(Clone)]
pub struct RealtimeChannel {
    create_use_case: Arc<dyn CreateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    updates: ProductUpdates,
}

impl RealtimeChannel {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        updates: ProductUpdates,
    ) -> Self {
        Self {
            create_use_case,
            delete_use_case,
            updates,
        }
    }

    /// Runs one client session until the socket closes.
    pub async fn serve(self, socket: WebSocketStream) {
        let (mut sink, mut stream) = socket.split();
        let mut updates = self.updates.subscribe();

        tracing::info!("Realtime client connected");

        loop {
            tokio::select! {
                frame = stream.next() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        let reply = self.handle_frame(&text).await;
                        if !send_event(&mut sink, &reply).await {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "Realtime socket failed");
                        break;
                    }
                },
                update = updates.recv() => match update {
                    Ok(event) => {
                        if !send_event(&mut sink, &event).await {
                            break;
                        }
                    }
                    // Updates carry no payload, so one is as good as many.
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "Realtime client lagged behind updates");
                        if !send_event(&mut sink, &ServerEvent::ProductsUpdated).await {
                            break;
                        }
                    }
                    Err(RecvError::Closed) => break,
                },
            }
        }

        tracing::info!("Realtime client disconnected");
    }

    /// Answers one client frame. The reply goes to the sender only; successful
    /// mutations also notify every subscriber.
    pub async fn handle_frame(&self, text: &str) -> ServerEvent {
        let event = match serde_json::from_str::<ClientEvent>(text) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "Unreadable realtime frame");
                return ServerEvent::error(format!("realtime.invalid_frame: {}", err));
            }
        };

        match event {
            ClientEvent::CreateProduct(request) => {
                let params = CreateProductParams {
                    fields: request.into_fields(),
                };
                match self.create_use_case.execute(params).await {
                    Ok(product) => {
                        self.updates.notify();
                        ServerEvent::ProductCreated(ProductEnvelope::success(
                            product,
                            Some("product.created"),
                        ))
                    }
                    Err(err) => ServerEvent::error(err.to_string()),
                }
            }
            ClientEvent::DeleteProduct(raw) => {
                let Ok(id) = ProductId::from_json(&raw) else {
                    return ServerEvent::error(format!("product.not_found: {}", raw));
                };
                match self.delete_use_case.execute(DeleteProductParams { id }).await {
                    Ok(product) => {
                        self.updates.notify();
                        ServerEvent::ProductDeleted(ProductEnvelope::success(
                            product,
                            Some("product.deleted"),
                        ))
                    }
                    Err(err) => ServerEvent::error(err.to_string()),
                }
            }
            // Joining asks for a refresh of the sender's product list.
            ClientEvent::JoinProducts => ServerEvent::ProductsUpdated,
        }
    }
}

async fn send_event<S>(sink: &mut S, event: &ServerEvent) -> bool
where
    S: Sink<Message> + Unpin,
{
    let frame = match event.to_frame() {
        Ok(frame) => frame,
        Err(err) => {
            tracing::error!(error = %err, "Failed to encode realtime event");
            return true;
        }
    };
    sink.send(Message::Text(frame)).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use mockall::mock;
    use tokio::sync::broadcast::error::TryRecvError;

    mock! {
        pub CreateProduct {}

        #[async_trait]
        impl CreateProductUseCase for CreateProduct {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub DeleteProduct {}

        #[async_trait]
        impl DeleteProductUseCase for DeleteProduct {
            async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
        }
    }

    fn lamp(id: u64) -> Product {
        Product::from_repository(
            ProductId::new(id),
            "Lamp".to_string(),
            "Desk lamp".to_string(),
            "LMP-1".to_string(),
            12.5,
            true,
            4,
            "home".to_string(),
            vec![],
        )
    }

    fn channel(
        create: MockCreateProduct,
        delete: MockDeleteProduct,
        updates: ProductUpdates,
    ) -> RealtimeChannel {
        RealtimeChannel::new(Arc::new(create), Arc::new(delete), updates)
    }

    #[tokio::test]
    async fn should_reply_created_and_notify_when_product_created() {
        let mut create = MockCreateProduct::new();
        create
            .expect_execute()
            .withf(|params| params.fields.title.is_some())
            .returning(|_| Ok(lamp(1)));
        let updates = ProductUpdates::new(8);
        let mut subscriber = updates.subscribe();
        let channel = channel(create, MockDeleteProduct::new(), updates);

        let reply = channel
            .handle_frame(r#"{"event":"create-product","data":{"title":"Lamp"}}"#)
            .await;

        match reply {
            ServerEvent::ProductCreated(envelope) => assert_eq!(envelope.payload.id, 1),
            other => panic!("unexpected reply: {:?}", other),
        }
        assert!(matches!(
            subscriber.try_recv(),
            Ok(ServerEvent::ProductsUpdated)
        ));
    }

    #[tokio::test]
    async fn should_reply_error_without_notifying_when_create_rejected() {
        let mut create = MockCreateProduct::new();
        create
            .expect_execute()
            .returning(|_| Err(ProductError::FieldRequired { field: "title" }));
        let updates = ProductUpdates::new(8);
        let mut subscriber = updates.subscribe();
        let channel = channel(create, MockDeleteProduct::new(), updates);

        let reply = channel
            .handle_frame(r#"{"event":"create-product","data":{}}"#)
            .await;

        match reply {
            ServerEvent::ProductError(error) => {
                assert_eq!(error.message, "product.field_required: title")
            }
            other => panic!("unexpected reply: {:?}", other),
        }
        assert!(matches!(subscriber.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn should_delete_by_string_id() {
        let mut delete = MockDeleteProduct::new();
        delete
            .expect_execute()
            .withf(|params| params.id == ProductId::new(7))
            .returning(|_| Ok(lamp(7)));
        let channel = channel(MockCreateProduct::new(), delete, ProductUpdates::new(8));

        let reply = channel
            .handle_frame(r#"{"event":"delete-product","data":"7"}"#)
            .await;

        assert!(matches!(reply, ServerEvent::ProductDeleted(_)));
    }

    #[tokio::test]
    async fn should_reply_not_found_when_delete_id_unparsable() {
        let mut delete = MockDeleteProduct::new();
        delete.expect_execute().never();
        let channel = channel(MockCreateProduct::new(), delete, ProductUpdates::new(8));

        let reply = channel
            .handle_frame(r#"{"event":"delete-product","data":"abc"}"#)
            .await;

        match reply {
            ServerEvent::ProductError(error) => {
                assert!(error.message.starts_with("product.not_found"))
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_reply_error_when_frame_unreadable() {
        let channel = channel(
            MockCreateProduct::new(),
            MockDeleteProduct::new(),
            ProductUpdates::new(8),
        );

        let reply = channel.handle_frame("not json").await;

        assert!(matches!(reply, ServerEvent::ProductError(_)));
    }

    #[tokio::test]
    async fn should_ask_sender_to_refresh_when_joining() {
        let updates = ProductUpdates::new(8);
        let mut subscriber = updates.subscribe();
        let channel = channel(MockCreateProduct::new(), MockDeleteProduct::new(), updates);

        let reply = channel.handle_frame(r#"{"event":"join-products"}"#).await;

        assert!(matches!(reply, ServerEvent::ProductsUpdated));
        assert!(matches!(subscriber.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn should_not_fail_when_notifying_without_subscribers() {
        let updates = ProductUpdates::new(0);

        updates.notify();

        let mut late = updates.subscribe();
        assert!(matches!(late.try_recv(), Err(TryRecvError::Empty)));
    }
}
