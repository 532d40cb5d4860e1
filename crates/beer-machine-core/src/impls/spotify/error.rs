//! Errors raised by the Spotify Web API client.

use thiserror::Error;

use crate::domain::BeerError;

#[derive(Error, Debug)]
pub enum SpotifyError {
    /// Credentials rejected or token revoked (401/403)
    #[error("spotify authentication failed: {0}")]
    Unauthorized(String),

    /// Rate limiting (429)
    #[error("spotify rate limit exceeded")]
    RateLimited,

    #[error("spotify API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport, timeout or decoding error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl SpotifyError {
    pub fn from_status_code(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(message.into()),
            429 => Self::RateLimited,
            _ => Self::Api {
                status,
                message: message.into(),
            },
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, SpotifyError::Unauthorized(_))
    }
}

impl From<SpotifyError> for BeerError {
    fn from(err: SpotifyError) -> Self {
        BeerError::upstream_with("spotify request failed", err)
    }
}
