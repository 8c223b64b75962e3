//! PostgreSQL-backed [`UserStore`]. Every statement binds its inputs as `$n` parameters.

use super::UserStore;
use crate::config::DbConfig;
use crate::error::{AppError, ConfigError};
use crate::model::{NewUser, User};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow, PgSslMode};
use sqlx::{PgPool, Row};
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

const CREATE_USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name VARCHAR(255), email VARCHAR(255))";

const SELECT_ALL: &str = "SELECT id, name, email FROM users";
const SELECT_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email";
const UPDATE: &str = "UPDATE users SET name = $1, email = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM users WHERE id = $1";

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgUserStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self { pool, query_timeout }
    }

    /// Open the pool and establish one connection up front, so an unreachable
    /// database fails startup instead of the first request.
    pub async fn connect(config: &DbConfig) -> Result<Self, AppError> {
        let ssl_mode = PgSslMode::from_str(&config.ssl_mode).map_err(|_| ConfigError::Invalid {
            key: "DB_SSLMODE",
            value: config.ssl_mode.clone(),
        })?;
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.dbname)
            .ssl_mode(ssl_mode);
        let pool = PgPoolOptions::new()
            .acquire_timeout(config.query_timeout)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool, config.query_timeout))
    }

    /// Idempotent; safe to run on every startup.
    pub async fn ensure_table(&self) -> Result<(), AppError> {
        tracing::debug!(sql = %CREATE_USERS_TABLE, "query");
        self.bounded(sqlx::query(CREATE_USERS_TABLE).execute(&self.pool))
            .await?;
        Ok(())
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        bounded(self.query_timeout, fut).await
    }
}

/// Run one database call under `limit`. Running out of time, whether waiting for
/// a pooled connection or for the statement itself, is always [`AppError::Timeout`].
async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(sqlx::Error::PoolTimedOut)) | Err(_) => {
            tracing::warn!(timeout = ?limit, "database call timed out");
            Err(AppError::Timeout)
        }
        Ok(Err(e)) => Err(AppError::Db(e)),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = self
            .bounded(sqlx::query(SELECT_ALL).fetch_all(&self.pool))
            .await?;
        rows.iter()
            .map(row_to_user)
            .collect::<Result<_, _>>()
            .map_err(AppError::Db)
    }

    async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = self
            .bounded(sqlx::query(SELECT_BY_ID).bind(id).fetch_optional(&self.pool))
            .await?;
        row.as_ref().map(row_to_user).transpose().map_err(AppError::Db)
    }

    async fn create(&self, input: &NewUser) -> Result<User, AppError> {
        tracing::debug!(sql = %INSERT, "query");
        let row = self
            .bounded(
                sqlx::query(INSERT)
                    .bind(&input.name)
                    .bind(&input.email)
                    .fetch_one(&self.pool),
            )
            .await?;
        Ok(row_to_user(&row)?)
    }

    async fn update(&self, id: i32, input: &NewUser) -> Result<bool, AppError> {
        tracing::debug!(sql = %UPDATE, id, "query");
        let result = self
            .bounded(
                sqlx::query(UPDATE)
                    .bind(&input.name)
                    .bind(&input.email)
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let result = self
            .bounded(sqlx::query(DELETE).bind(id).execute(&self.pool))
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.bounded(sqlx::query("SELECT 1").fetch_optional(&self.pool))
            .await?;
        Ok(())
    }
}

/// `name` and `email` are nullable in the DDL; rows written outside the API may hold NULL.
fn row_to_user(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
        email: row.try_get::<Option<String>, _>("email")?.unwrap_or_default(),
    })
}
