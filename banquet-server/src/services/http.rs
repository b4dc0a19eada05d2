use std::time::Instant;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    tracing::info!(target: "http_access", "{} {} {} {}ms", method, uri, status, elapsed_ms);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        // Schedule APIs
        .merge(crate::api::program::router())
        .merge(crate::api::rundown::router())
        .merge(crate::api::committee::router())
        // Seating APIs
        .merge(crate::api::categories::router())
        .merge(crate::api::tables::router())
        // Task APIs
        .merge(crate::api::tasks::router())
}

/// Full application: routes, state, middleware and, in production, the
/// built front-end with `index.html` as SPA fallback
pub fn build_router(state: ServerState) -> Router {
    let static_dir = state
        .config
        .is_production()
        .then(|| state.config.static_dir.clone());

    let mut app = build_app().with_state(state);

    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
