//! Users API: JSON CRUD over a single PostgreSQL `users` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{NewUser, User};
pub use routes::build_app;
pub use state::AppState;
pub use store::{PgUserStore, UserStore};
