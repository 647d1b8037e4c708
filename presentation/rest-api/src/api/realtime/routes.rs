use poem::{
    IntoResponse, handler,
    web::{Data, websocket::WebSocket},
};

use crate::api::realtime::channel::RealtimeChannel;

/// Upgrades `GET /realtime` to a WebSocket session on the product channel.
#[handler]
pub async fn realtime(ws: WebSocket, Data(channel): Data<&RealtimeChannel>) -> impl IntoResponse {
    let channel = channel.clone();
    ws.on_upgrade(move |socket| channel.serve(socket))
}
