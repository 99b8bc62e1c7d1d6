//! HTTP handlers.
//!
//! - `/`   : text exposition of a fresh host sample
//! - other : 404, empty body (including `/` with a query string)
//!
//! Non-GET methods on `/` get 405.

use std::any::Any;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use hostgauge_core::exposition;

pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// True only for the bare origin-form target `/` (no query, no authority).
pub fn is_exact_root(uri: &Uri) -> bool {
    uri.scheme().is_none()
        && uri.authority().is_none()
        && uri.path_and_query().map(|p| p.as_str()) == Some("/")
}

pub async fn metrics(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if !is_exact_root(&uri) {
        return not_found(method, uri).await.into_response();
    }

    match state.source().sample().await {
        Ok(snapshot) => {
            tracing::info!(path = "/", status = 200, "served metrics");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)],
                exposition::render(&snapshot),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(path = "/", status = 500, code = e.code().as_str(), error = %e, "metric sample failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)],
                e.to_string(),
            )
                .into_response()
        }
    }
}

pub async fn not_found(method: Method, uri: Uri) -> StatusCode {
    tracing::warn!(%method, target = %uri, status = 404, "unknown path");
    StatusCode::NOT_FOUND
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    if !is_exact_root(&uri) {
        return not_found(method, uri).await.into_response();
    }
    tracing::warn!(%method, path = uri.path(), status = 405, "method not allowed");
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response()
}

/// Turns a handler panic into a 500 so the listener keeps serving.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!(status = 500, panic = detail, "request handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
