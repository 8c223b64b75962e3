//! Request extractors that reject with [`crate::error::AppError`] instead of axum's plain-text rejections.

mod payload;
mod user_id;

pub use payload::UserPayload;
pub use user_id::UserId;
