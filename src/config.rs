// src/config.rs
use std::{env, net::SocketAddr, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    static_root: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite:articles.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_static_root() -> String {
    "static".into()
}

impl AppConfig {
    /// Build configuration from environment variables, with sensible
    /// defaults for every key.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let static_root = env::var("STATIC_ROOT").unwrap_or_else(|_| default_static_root());

        listen_addr.parse::<SocketAddr>().map_err(|_| {
            ConfigError::Invalid(format!("LISTEN_ADDR is not a socket address: {listen_addr}"))
        })?;

        Ok(Self {
            database_url,
            listen_addr,
            static_root: PathBuf::from(static_root),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn static_root(&self) -> &PathBuf {
        &self.static_root
    }
}
