//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_default();
        let port = std::env::var("PORT").unwrap_or_default();
        Self::from_vars(Some(&host), Some(&port))
    }

    /// Blank values fall back to defaults.
    pub fn from_vars(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = match host.map(str::trim) {
            Some(h) if !h.is_empty() => h.to_owned(),
            _ => DEFAULT_HOST.to_owned(),
        };
        let port = match port.map(str::trim) {
            Some(p) if !p.is_empty() => p.parse::<u16>().map_err(|_| ConfigError::InvalidPort(p.to_owned()))?,
            _ => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// `host:port`, resolved by the listener so hostnames work too.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT }
    }
}
