// Process configuration read from the environment.
//
// Values come from ITEMS_* variables; an optional .env file is loaded by main
// before this runs. `from_lookup` takes any key lookup so tests never touch
// the real environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::modules::items::use_cases::list_items::query::DEFAULT_LIMIT;

pub const HOST_VAR: &str = "ITEMS_HOST";
pub const PORT_VAR: &str = "ITEMS_PORT";
pub const CORS_ORIGINS_VAR: &str = "ITEMS_CORS_ORIGINS";
pub const DEFAULT_LIMIT_VAR: &str = "ITEMS_DEFAULT_LIMIT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub default_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = match read(HOST_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: HOST_VAR,
                expected: "an IP address",
                value,
            })?,
            None => DEFAULT_HOST,
        };

        let port = match read(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                expected: "a port number",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let default_limit = match read(DEFAULT_LIMIT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: DEFAULT_LIMIT_VAR,
                expected: "a non-negative integer",
                value,
            })?,
            None => DEFAULT_LIMIT,
        };

        let origins = read(CORS_ORIGINS_VAR).unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string());
        let allowed_origins: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();
        // Credentialed CORS cannot answer with a wildcard origin.
        if allowed_origins.iter().any(|origin| origin == "*") {
            return Err(ConfigError::Invalid {
                var: CORS_ORIGINS_VAR,
                expected: "explicit origins (credentials are allowed)",
                value: origins,
            });
        }

        Ok(Self {
            host,
            port,
            allowed_origins,
            default_limit,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
