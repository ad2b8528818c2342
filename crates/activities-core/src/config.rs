//! Server configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// HTTP server port (`PORT`).
    pub port: u16,
    /// Directory served under `/static` (`ACTIVITIES_STATIC_DIR`).
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(default_static_dir: impl AsRef<Path>) -> Self {
        Self::from_lookup(default_static_dir, |key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(default_static_dir: impl AsRef<Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT value {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("ACTIVITIES_STATIC_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| default_static_dir.as_ref().to_path_buf());

        Self {
            host,
            port,
            static_dir,
        }
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid bind address {}:{}: {}", self.host, self.port, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup("static", |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9100"),
            ("ACTIVITIES_STATIC_DIR", "/srv/www"),
        ]);
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9100");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = config_with(&[("PORT", "eighty")]);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let config = config_with(&[("HOST", "not a host")]);
        assert!(matches!(config.bind_addr(), Err(Error::Config(_))));
    }
}
