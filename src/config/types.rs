//! Runtime settings for the service and its database connection.

use std::fmt;
use std::time::Duration;

/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8090;

/// libpq sslmode used when `DB_SSLMODE` is unset.
pub const DEFAULT_SSL_MODE: &str = "disable";

/// Upper bound for a single database call when `DB_QUERY_TIMEOUT_SECS` is unset.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;

/// Connection parameters for the users database.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub dbname: String,
    pub ssl_mode: String,
    pub query_timeout: Duration,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .field("ssl_mode", &self.ssl_mode)
            .field("query_timeout", &self.query_timeout)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub db: DbConfig,
    /// HTTP listen port.
    pub port: u16,
}
