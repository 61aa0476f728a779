use crate::util::env::{get_bool_from_env_or, get_env_or, load_dotenv};
use anyhow::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub http: HTTPConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HTTPConfig {
    pub ip: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Adds `TraceLayer` spans and events; meant for debugging the transport.
    pub log_requests: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        Ok(AppConfig {
            http: HTTPConfig::from_env()?,
            log: LogConfig::from_env()?,
        })
    }

    /// Socket address string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http.ip, self.http.port)
    }
}

impl HTTPConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let defaults = HTTPConfig::default();
        let ip = get_env_or("HTTP_IP", defaults.ip)?;
        let port = get_env_or("HTTP_PORT", defaults.port)?;

        Ok(HTTPConfig { ip, port })
    }
}

// Machine controllers are flashed with port 9000, so that stays the default.
impl Default for HTTPConfig {
    fn default() -> Self {
        HTTPConfig {
            ip: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let log_requests = get_bool_from_env_or("LOG_REQUESTS", false)?;

        Ok(LogConfig { log_requests })
    }
}
