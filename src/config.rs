use std::env;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 5000;

/// Process settings read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Unset means `limit` is served as requested.
    pub max_page_size: Option<u32>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_page_size: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("HOST").filter(|s| !s.trim().is_empty()).unwrap_or(defaults.host);
        let port = lookup("PORT").and_then(|s| s.parse().ok()).unwrap_or(defaults.port);
        let max_page_size = lookup("MAX_PAGE_SIZE")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .or(defaults.max_page_size);
        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        Self { host, port, max_page_size, log_level }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
