//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::error::AuthResult;
use crate::infra::memory::InMemoryCredentialStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router serving `/user/login` and `/user/create`
///
/// Fails when the configured account email is malformed.
pub fn auth_router(config: &AuthConfig) -> AuthResult<Router> {
    let repo = InMemoryCredentialStore::from_config(config)?;
    Ok(auth_router_with_store(repo))
}

/// Create the Auth router over an existing credential store
pub fn auth_router_with_store(repo: InMemoryCredentialStore) -> Router {
    let state = AuthAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/user/login", post(handlers::login))
        .route("/user/create", post(handlers::create_user))
        .with_state(state)
}
