// devops-info-service - Environment configuration

use std::num::ParseIntError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Verbose logging when no explicit `RUST_LOG` is given.
    pub debug: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `DEBUG` and `RUST_LOG_FORMAT` from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };

        let debug = lookup("DEBUG")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_format = match lookup("RUST_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            host,
            port,
            debug,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directive used when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
