//! `/users` routes. Unsupported methods on these paths answer 404 like any unknown route.

use super::not_found;
use crate::handlers::users::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list).post(create).fallback(not_found))
        .route(
            "/users/:id",
            get(read).put(update).delete(delete).fallback(not_found),
        )
        .with_state(state)
}
