//! Runtime settings from environment variables (a `.env` file is loaded by the binaries).

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    /// Full URL; when set, the discrete fields below are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub database: DatabaseSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse settings from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = DatabaseSettings {
            url: get("DATABASE_URL"),
            host: get("PGHOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(&get, "PGPORT", 5432)?,
            user: get("PGUSER").unwrap_or_else(|| "postgres".into()),
            password: get("PGPASSWORD"),
            database: get("PGDATABASE").unwrap_or_else(|| "rowkeep".into()),
            ssl_mode: parse_or(&get, "PGSSLMODE", PgSslMode::Disable)?,
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_or(&get, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            statement_timeout: Duration::from_secs(parse_or(&get, "DB_STATEMENT_TIMEOUT_SECS", 30)?),
        };
        let bind_addr = parse_or(&get, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 8080)))?;

        Ok(Settings { bind_addr, database })
    }
}

impl DatabaseSettings {
    /// Connection options for the pool. Every connection carries the statement timeout.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let opts = match &self.url {
            Some(url) => PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
                var: "DATABASE_URL",
                reason: e.to_string(),
            })?,
            None => {
                let opts = PgConnectOptions::new()
                    .host(&self.host)
                    .port(self.port)
                    .username(&self.user)
                    .database(&self.database)
                    .ssl_mode(self.ssl_mode);
                match &self.password {
                    Some(password) => opts.password(password),
                    None => opts,
                }
            }
        };
        let statement_timeout = format!("{}ms", self.statement_timeout.as_millis());
        Ok(opts.options([("statement_timeout", statement_timeout.as_str())]))
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

fn parse_or<T, G>(get: &G, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
