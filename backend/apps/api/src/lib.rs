//! API Server
//!
//! Assembles the feature routers into one application. `main` adds the
//! tracing subscriber and binds the listener; everything else lives here so
//! integration tests drive the same `Router` the server runs.

pub mod config;
pub mod openapi;

use anyhow::Context;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ApiConfig;

/// Build the application router with CORS and request tracing
pub fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let auth = auth::auth_router(&config.auth).context("failed to build auth router")?;
    let lotto = lotto::lotto_router(config.lotto.clone());

    let app = Router::new()
        .merge(auth)
        .merge(lotto)
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.frontend_origins)),
        );

    Ok(app)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
}
