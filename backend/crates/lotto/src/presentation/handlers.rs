//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::error::problem::ProblemDetails;
use std::sync::Arc;

use crate::application::check_results::CheckResultsUseCase;
use crate::application::config::LottoConfig;
use crate::application::generate_numbers::GenerateNumbersUseCase;
use crate::domain::entities::GradingRequest;
use crate::error::LottoResult;
use crate::presentation::dto::{LottoCheckRequest, LottoCheckResponse, LottoRequest, LottoResponse};

/// Shared state for lotto handlers
#[derive(Clone)]
pub struct LottoAppState {
    pub config: Arc<LottoConfig>,
}

/// GET /lotto
#[utoipa::path(
    get,
    path = "/lotto",
    tag = "lotto",
    responses(
        (status = 200, description = "Freshly drawn number rows", body = LottoResponse)
    )
)]
pub async fn generate_numbers(State(state): State<LottoAppState>) -> Json<LottoResponse> {
    let use_case = GenerateNumbersUseCase::new(state.config.clone());
    let output = use_case.execute(&mut rand::rng());

    Json(LottoResponse {
        numbers: output.numbers,
    })
}

/// POST /lotto
#[utoipa::path(
    post,
    path = "/lotto",
    tag = "lotto",
    request_body = LottoRequest,
    responses(
        (status = 200, description = "The submitted rows, unchanged", body = LottoResponse),
        (status = 400, description = "Malformed JSON", body = ProblemDetails),
        (status = 415, description = "Content-Type is not application/json", body = ProblemDetails),
        (status = 422, description = "JSON does not match the expected shape", body = ProblemDetails)
    )
)]
pub async fn submit_numbers(
    payload: Result<Json<LottoRequest>, JsonRejection>,
) -> LottoResult<Json<LottoResponse>> {
    let Json(req) = payload?;

    tracing::debug!(rows = req.numbers.len(), "Received lotto numbers");

    Ok(Json(LottoResponse {
        numbers: req.numbers,
    }))
}

/// POST /lotto/check
#[utoipa::path(
    post,
    path = "/lotto/check",
    tag = "lotto",
    request_body(content = [LottoCheckRequest], description = "Rounds to grade"),
    responses(
        (status = 200, description = "Graded rounds in request order", body = [LottoCheckResponse]),
        (status = 400, description = "Malformed JSON", body = ProblemDetails),
        (status = 415, description = "Content-Type is not application/json", body = ProblemDetails),
        (status = 422, description = "JSON does not match the expected shape", body = ProblemDetails)
    )
)]
pub async fn check_results(
    payload: Result<Json<Vec<LottoCheckRequest>>, JsonRejection>,
) -> LottoResult<Json<Vec<LottoCheckResponse>>> {
    let Json(req) = payload?;

    let requests: Vec<GradingRequest> = req.into_iter().map(Into::into).collect();
    let results = CheckResultsUseCase::new().execute(requests);

    Ok(Json(results.into_iter().map(Into::into).collect()))
}
