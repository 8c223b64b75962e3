//! Router assembly.

mod common;
mod users;

pub use common::common_routes;
pub use users::user_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Request bodies above this size are refused with a 413 before reaching a handler.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub(crate) async fn not_found() -> AppError {
    AppError::NotFound("route".into())
}

/// Full application: common routes, user routes, JSON 404 fallback, tracing and body limit.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(user_routes(state))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
