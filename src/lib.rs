pub mod config;
pub mod handlers;
pub mod models;
pub mod request_info;
pub mod state;
pub mod system_info;
pub mod uptime;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevOps Info Service",
        version = "1.0.0",
        description = "DevOps course info service"
    ),
    paths(handlers::index, handlers::health),
    components(schemas(
        models::IndexResponse,
        models::ServiceInfo,
        models::RuntimeInfo,
        models::EndpointInfo,
        models::HealthResponse,
        models::ErrorBody,
        system_info::SystemInfo,
        request_info::RequestInfo,
    )),
    tags(
        (name = "info", description = "Service and host information"),
        (name = "health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;

/// Build the application router with the given state.
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a network port.
pub fn create_router(state: AppState) -> Router {
    let nosniff: SetResponseHeaderLayer<HeaderValue> = SetResponseHeaderLayer::overriding(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(nosniff)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}
