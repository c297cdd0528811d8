use std::fmt;

use crate::core::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://your-service.microcms.io";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stdio,
    Http,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stdio => f.write_str("stdio"),
            Mode::Http => f.write_str("http"),
        }
    }
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub mode: Mode,
    pub port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("mode", &self.mode)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = non_empty_var("MICROCMS_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let base_url = non_empty_var("MICROCMS_BASE_URL")
            .or_else(|| {
                non_empty_var("MICROCMS_SERVICE_DOMAIN")
                    .map(|domain| format!("https://{domain}.microcms.io"))
            })
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mode = match std::env::var("MODE").unwrap_or_else(|_| "stdio".into()).as_str() {
            "stdio" => Mode::Stdio,
            "http" => Mode::Http,
            other => return Err(ConfigError::InvalidMode(other.to_string())),
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(p) if p != 0 => p,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            Err(_) => 8080,
        };

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            mode,
            port,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
