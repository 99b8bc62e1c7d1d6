//! Axum router wiring.
//!
//! Exactly one route (`/`); everything else falls through to a 404.

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::metrics).fallback(ops::method_not_allowed))
        .fallback(ops::not_found)
        .layer(CatchPanicLayer::custom(ops::panic_response))
        .with_state(state)
}
