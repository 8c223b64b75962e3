//! Persistence handle for the `users` table.
//! Handlers only see the [`UserStore`] trait; production wires in [`PgUserStore`].

mod postgres;
#[cfg(test)]
pub(crate) mod memory;

pub use postgres::PgUserStore;

use crate::error::AppError;
use crate::model::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows, in whatever order the database returns them.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Insert a row and return it with its assigned id.
    async fn create(&self, input: &NewUser) -> Result<User, AppError>;

    /// Replace name and email. Returns false when no row has `id`.
    async fn update(&self, id: i32, input: &NewUser) -> Result<bool, AppError>;

    /// Returns false when no row has `id`.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Round trip to the database, used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
