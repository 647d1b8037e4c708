use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route, Server as PoemServer, get,
    listener::TcpListener,
    middleware::{Cors, Tracing},
    web::Json,
};
use poem_openapi::OpenApiService;

use crate::api::error::ErrorResponse;
use crate::api::realtime::routes::realtime;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(container, config.cors, format!("http://{}/api", addr));

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        tracing::info!("Realtime channel at ws://{}/realtime", addr);

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Rejections raised by the framework itself (unreadable bodies, unknown
/// routes) use the same envelope as domain errors.
async fn error_envelope(err: poem::Error) -> Response {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    }
    (status, Json(ErrorResponse::new(format!("request.rejected: {}", err)))).into_response()
}

/// Routes: REST API under `/api`, docs, and the realtime WebSocket.
pub fn build_app(container: DependencyContainer, cors: Cors, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (container.health_api, container.product_api, container.cart_api),
        "Storefront API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/api", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .at("/realtime", get(realtime.data(container.realtime_channel)))
        .catch_all_error(error_envelope)
        .with(cors)
        .with(Tracing)
}
