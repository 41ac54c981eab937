use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    /// Connection string of the relational store, e.g. `sqlite://students.db?mode=rwc`
    pub database_url: String,

    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let raw_bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = parse_bind_address(&raw_bind_address)?;

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}

fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
            name: "BIND_ADDRESS".to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
