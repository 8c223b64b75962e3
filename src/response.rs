//! Success response helpers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Body of update and delete responses.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn message(text: &str) -> (StatusCode, Json<Message>) {
    ok(Message {
        message: text.to_string(),
    })
}
