// ============================
// catalog-backend/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Token signing settings
    pub jwt: JwtSettings,
    /// Password requirements
    pub password: PasswordSettings,
}

/// Token signing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtSettings {
    /// Symmetric signing secret, held only by the server
    pub secret: String,
    /// Token lifetime in seconds
    pub ttl_secs: u64,
}

/// Password requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordSettings {
    /// Minimum password length
    pub min_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().expect("static bind address"),
            log_level: "info".to_string(),
            jwt: JwtSettings::default(),
            password: PasswordSettings::default(),
        }
    }
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            secret: "change-me-before-deploying".to_string(),
            ttl_secs: 60 * 60, // 1 hour
        }
    }
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self { min_length: 6 }
    }
}

impl Settings {
    /// Load settings from `config.toml` and `CATALOG_`-prefixed environment
    /// variables, over the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load settings with an explicit config file path.
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CATALOG_").split("__"))
            .extract()?;

        Ok(settings)
    }
}
