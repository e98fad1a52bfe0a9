use std::str::FromStr;

use axum::http::HeaderValue;
use sqlx::postgres::PgConnectOptions;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("{key} has an invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },

    /// `DATABASE_URL` could not be parsed into connect options.
    #[error("DATABASE_URL is invalid: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// The single browser origin allowed to make cross-origin requests.
    pub cors_origin: HeaderValue,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection settings.
    pub database: DbConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `8080`                   |
    /// | `CORS_ORIGIN`          | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    ///
    /// Database variables are documented on [`DbConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", 8080)?;

        let origin = env_or("CORS_ORIGIN", "http://localhost:3000");
        let cors_origin =
            HeaderValue::from_str(origin.trim()).map_err(|_| ConfigError::InvalidValue {
                key: "CORS_ORIGIN",
                value: origin.clone(),
            })?;

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30)?;

        Ok(Self {
            host,
            port,
            cors_origin,
            request_timeout_secs,
            database: DbConfig::from_env()?,
        })
    }
}

/// Database connection settings.
///
/// Either a full `DATABASE_URL` or the individual parts are used; the URL
/// wins when both are present.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load database settings from environment variables.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DATABASE_URL`       | unset       |
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | empty       |
    /// | `DB_NAME`            | `todos`     |
    /// | `DB_MAX_CONNECTIONS` | `10`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env_or("DB_HOST", "localhost"),
            port: parse_env("DB_PORT", 5432)?,
            user: env_or("DB_USER", "postgres"),
            password: env_or("DB_PASSWORD", ""),
            name: env_or("DB_NAME", "todos"),
            max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
        })
    }

    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::InvalidDatabaseUrl);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}
