//! User CRUD handlers: list, read, create, update, delete.
//! Each runs exactly one statement through the injected store.

use crate::error::AppError;
use crate::extractors::{UserId, UserPayload};
use crate::response::{created, message, ok};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.store.list().await?;
    tracing::debug!(count = users.len(), "listed users");
    Ok(ok(users))
}

pub async fn read(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(ok(user))
}

pub async fn create(
    State(state): State<AppState>,
    UserPayload(input): UserPayload,
) -> Result<impl IntoResponse, AppError> {
    let user = state.store.create(&input).await?;
    tracing::info!(id = user.id, "user created");
    Ok(created(user))
}

pub async fn update(
    State(state): State<AppState>,
    UserId(id): UserId,
    UserPayload(input): UserPayload,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.update(id, &input).await? {
        return Err(AppError::NotFound(format!("user {}", id)));
    }
    tracing::info!(id, "user updated");
    Ok(message("User updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("user {}", id)));
    }
    tracing::info!(id, "user deleted");
    Ok(message("User deleted"))
}
