//! JSON body for create and update.

use crate::error::AppError;
use crate::model::NewUser;
use crate::routes::MAX_BODY_BYTES;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};

/// A decoded and validated [`NewUser`]. Oversized bodies are a 413, any other
/// failure is a 400, and in both cases the handler never runs.
#[derive(Clone, Debug)]
pub struct UserPayload(pub NewUser);

#[async_trait]
impl<S> FromRequest<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<NewUser>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let message = rejection.body_text();
                tracing::info!(error = %message, "rejected user payload");
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(MAX_BODY_BYTES)
                } else {
                    AppError::BadRequest(message)
                }
            })?;
        input.validate()?;
        Ok(UserPayload(input))
    }
}
