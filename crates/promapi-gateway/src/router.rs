//! Axum router wiring.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
    routing::{any, get},
    Router,
};

use promapi_core::PromApiError;

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(api::BUILDINFO_PATH, any(api::buildinfo::buildinfo))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let err = PromApiError::NotFound(uri.path().to_string());
    state
        .writer()
        .error(StatusCode::NOT_FOUND, "unmatched", &err)
}
