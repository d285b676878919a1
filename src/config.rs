/*---------- Imports ----------*/
use std::{env, fmt, time::Duration};
use thiserror::Error;

/*---------- Constants ----------*/
const DEFAULT_PORT: u16 = 3306;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 3;

/*---------- Enums ----------*/
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid value for environment variable {name}: {value:?}")]
    InvalidEnvVar { name: &'static str, value: String },
}

/// Coordinates of the RDS MySQL instance holding the `Purchases` table.
///
/// Read from the environment:
/// - `RDS_HOST`, `RDS_USER`, `RDS_PASSWORD`, `RDS_DB_NAME` (required)
/// - `RDS_PORT` (default 3306)
/// - `RDS_CONNECT_TIMEOUT_SECS` (default 3)
#[derive(Clone, PartialEq)]
pub struct RdsConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub connect_timeout: Duration,
}

impl RdsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::MissingEnvVar(name));

        let port = match lookup("RDS_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "RDS_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("RDS_CONNECT_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "RDS_CONNECT_TIMEOUT_SECS",
                    value,
                })?,
            None => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        Ok(Self {
            host: required("RDS_HOST")?,
            port,
            user: required("RDS_USER")?,
            password: required("RDS_PASSWORD")?,
            database: required("RDS_DB_NAME")?,
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// Keeps the password out of logs.
impl fmt::Debug for RdsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RdsConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"********")
            .field("database", &self.database)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
