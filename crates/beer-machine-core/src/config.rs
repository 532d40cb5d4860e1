//! Runtime configuration sourced from environment variables.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::impls::cached_gateway::DEFAULT_PLAYLIST_TTL;
use crate::impls::inmem_styles::DEFAULT_STYLE_CAPACITY;

pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const ENV_PLAYLIST_TTL: &str = "BEER_MACHINE_PLAYLIST_TTL_SECS";
pub const ENV_PLAYLIST_CAPACITY: &str = "BEER_MACHINE_PLAYLIST_CACHE_CAPACITY";
pub const ENV_STYLE_CAPACITY: &str = "BEER_MACHINE_STYLE_STORE_CAPACITY";
pub const ENV_PROVIDER_TIMEOUT: &str = "BEER_MACHINE_PROVIDER_TIMEOUT_SECS";

pub const DEFAULT_PLAYLIST_CAPACITY: u64 = 10_000;
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },

    #[error("{present} is set but {missing} is not")]
    PartialCredentials {
        present: &'static str,
        missing: &'static str,
    },
}

/// Client-credentials pair for the Spotify Web API.
#[derive(Clone, PartialEq, Eq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

// keep the secret out of logs
impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` selects the stand-in playlist provider.
    pub spotify: Option<SpotifyCredentials>,
    pub playlist_ttl: Duration,
    pub playlist_cache_capacity: u64,
    pub style_store_capacity: u64,
    pub provider_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spotify: None,
            playlist_ttl: DEFAULT_PLAYLIST_TTL,
            playlist_cache_capacity: DEFAULT_PLAYLIST_CAPACITY,
            style_store_capacity: DEFAULT_STYLE_CAPACITY,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset and blank variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let spotify = match (get(ENV_CLIENT_ID), get(ENV_CLIENT_SECRET)) {
            (Some(client_id), Some(client_secret)) => Some(SpotifyCredentials {
                client_id,
                client_secret,
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::PartialCredentials {
                    present: ENV_CLIENT_ID,
                    missing: ENV_CLIENT_SECRET,
                });
            }
            (None, Some(_)) => {
                return Err(ConfigError::PartialCredentials {
                    present: ENV_CLIENT_SECRET,
                    missing: ENV_CLIENT_ID,
                });
            }
        };

        let playlist_ttl = match get(ENV_PLAYLIST_TTL) {
            Some(v) => Duration::from_secs(parse_positive(ENV_PLAYLIST_TTL, &v)?),
            None => defaults.playlist_ttl,
        };
        let playlist_cache_capacity = match get(ENV_PLAYLIST_CAPACITY) {
            Some(v) => parse_positive(ENV_PLAYLIST_CAPACITY, &v)?,
            None => defaults.playlist_cache_capacity,
        };
        let style_store_capacity = match get(ENV_STYLE_CAPACITY) {
            Some(v) => parse_positive(ENV_STYLE_CAPACITY, &v)?,
            None => defaults.style_store_capacity,
        };
        let provider_timeout = match get(ENV_PROVIDER_TIMEOUT) {
            Some(v) => Duration::from_secs(parse_positive(ENV_PROVIDER_TIMEOUT, &v)?),
            None => defaults.provider_timeout,
        };

        Ok(Self {
            spotify,
            playlist_ttl,
            playlist_cache_capacity,
            style_store_capacity,
            provider_timeout,
        })
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    let parsed: u64 = value.parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })?;
    if parsed == 0 {
        return Err(ConfigError::Zero { var });
    }
    Ok(parsed)
}
