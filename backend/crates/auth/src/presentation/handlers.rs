//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::error::problem::ProblemDetails;
use std::sync::Arc;

use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::error::AuthResult;
use crate::infra::memory::InMemoryCredentialStore;
use crate::presentation::dto::{CreateUserRequest, CreateUserResponse, LoginRequest, LoginResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState {
    pub repo: Arc<InMemoryCredentialStore>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /user/login
#[utoipa::path(
    post,
    path = "/user/login",
    tag = "user",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 401, description = "Email or password is incorrect", body = ProblemDetails),
        (status = 422, description = "JSON does not match the expected shape", body = ProblemDetails)
    )
)]
pub async fn login(
    State(state): State<AuthAppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>> {
    let Json(req) = payload?;

    let use_case = SignInUseCase::new(state.repo.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
    }))
}

// ============================================================================
// Create User
// ============================================================================

/// POST /user/create
#[utoipa::path(
    post,
    path = "/user/create",
    tag = "user",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Fields accepted; nothing is stored", body = CreateUserResponse),
        (status = 400, description = "A field failed validation", body = ProblemDetails),
        (status = 422, description = "JSON does not match the expected shape", body = ProblemDetails)
    )
)]
pub async fn create_user(
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AuthResult<Json<CreateUserResponse>> {
    let Json(req) = payload?;

    let input = SignUpInput {
        full_name: req.full_name,
        email: req.email,
        password: req.password,
    };

    let output = SignUpUseCase::new().execute(input)?;
    let full_name = output.user.full_name.into_inner();
    let email = output.user.email.into_inner();

    Ok(Json(CreateUserResponse {
        message: format!("User created: {}, {}", full_name, email),
        full_name,
        email,
    }))
}
