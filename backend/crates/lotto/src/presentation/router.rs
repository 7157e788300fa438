//! Lotto Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::LottoConfig;
use crate::presentation::handlers::{self, LottoAppState};

/// Create the lotto router
///
/// Routes are registered with their full paths so the router can be merged
/// at the application root.
pub fn lotto_router(config: LottoConfig) -> Router {
    let state = LottoAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/lotto",
            get(handlers::generate_numbers).post(handlers::submit_numbers),
        )
        .route("/lotto/check", post(handlers::check_results))
        .with_state(state)
}
