//! OpenAPI Document
//!
//! Assembled from the `utoipa` annotations on the feature crates' handlers
//! and DTOs. Served at `GET /api-docs/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lotto API",
        version = "0.1.0",
        description = "Lottery number generation, result checking and account stubs"
    ),
    paths(
        // user
        auth::presentation::handlers::login,
        auth::presentation::handlers::create_user,
        // lotto
        lotto::presentation::handlers::generate_numbers,
        lotto::presentation::handlers::submit_numbers,
        lotto::presentation::handlers::check_results,
    ),
    components(schemas(kernel::error::problem::ProblemDetails)),
    tags(
        (name = "user", description = "Login and account creation"),
        (name = "lotto", description = "Number generation and result checking"),
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
