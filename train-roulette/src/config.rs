//! Application configuration.
//!
//! Everything is read from environment variables at startup. Unset
//! variables fall back to the defaults in [`AppConfig::default`].

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::geo::Position;

/// Default base URL of the public transport API.
pub const DEFAULT_TRANSPORT_BASE_URL: &str = "https://transport.opendata.ch/v1";

/// Number of departures requested from the station board.
pub const DEFAULT_BOARD_LIMIT: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value we cannot use.
    #[error("invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Configuration for the whole application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,

    /// Base URL for the transport API (no trailing slash).
    pub transport_base_url: String,

    /// Request timeout for transport API calls, in seconds.
    pub transport_timeout_secs: u64,

    /// How many departures to ask the station board for.
    pub board_limit: u32,

    /// Serve fixtures from this directory instead of calling the live API.
    pub mock_data_dir: Option<PathBuf>,

    /// Position used when the browser cannot supply one.
    pub default_position: Option<Position>,

    /// Directory holding `app.js` and `style.css`.
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            transport_base_url: DEFAULT_TRANSPORT_BASE_URL.to_string(),
            transport_timeout_secs: 10,
            board_limit: DEFAULT_BOARD_LIMIT,
            mock_data_dir: None,
            default_position: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("ROULETTE_ADDR") {
            config.addr = addr.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "ROULETTE_ADDR",
                message: format!("{e}"),
            })?;
        }
        if let Some(url) = get("TRANSPORT_BASE_URL") {
            config = config.with_transport_base_url(url.trim());
        }
        if let Some(secs) = get("TRANSPORT_TIMEOUT_SECS") {
            config.transport_timeout_secs =
                secs.trim().parse().map_err(|e| ConfigError::Invalid {
                    name: "TRANSPORT_TIMEOUT_SECS",
                    message: format!("{e}"),
                })?;
        }
        if let Some(limit) = get("BOARD_LIMIT") {
            let limit: u32 = limit.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "BOARD_LIMIT",
                message: format!("{e}"),
            })?;
            if limit == 0 {
                return Err(ConfigError::Invalid {
                    name: "BOARD_LIMIT",
                    message: "must be at least 1".to_string(),
                });
            }
            config.board_limit = limit;
        }
        if let Some(dir) = get("MOCK_DATA_DIR") {
            config.mock_data_dir = Some(PathBuf::from(dir));
        }
        if let Some(pos) = get("DEFAULT_POSITION") {
            let pos = pos.parse::<Position>().map_err(|e| ConfigError::Invalid {
                name: "DEFAULT_POSITION",
                message: e.to_string(),
            })?;
            config.default_position = Some(pos);
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Set a custom transport API base URL (for testing).
    pub fn with_transport_base_url(mut self, url: impl Into<String>) -> Self {
        self.transport_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a fallback position.
    pub fn with_default_position(mut self, position: Position) -> Self {
        self.default_position = Some(position);
        self
    }
}
