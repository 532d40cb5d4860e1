//! Errors - domain error type and its classification
//!
//! Every fallible operation in the core returns [`BeerError`]. Callers that
//! need to react to a class of failure (e.g. a transport mapping errors to
//! status codes) match on [`BeerError::kind`] instead of on message text.

use super::ids::StyleId;

/// ErrorKind classifies a [`BeerError`].
///
/// - InvalidInput: a style failed construction (empty name, min > max, ...)
/// - NotFound: unknown style id, or no playlist for a style name
/// - EmptyCollection: selection attempted against zero styles
/// - UpstreamFailure: the external playlist provider failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    EmptyCollection,
    UpstreamFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::EmptyCollection => "empty_collection",
            ErrorKind::UpstreamFailure => "upstream_failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// BeerError is the domain error.
#[derive(Debug, thiserror::Error)]
pub enum BeerError {
    #[error("invalid beer style: {0}")]
    InvalidStyle(String),

    #[error("beer style not found: {0}")]
    StyleNotFound(StyleId),

    #[error("playlist not found for beer style '{0}'")]
    PlaylistNotFound(String),

    #[error("beer style list is empty")]
    EmptyStyleList,

    #[error("upstream provider failure: {message}")]
    Upstream {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl BeerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BeerError::InvalidStyle(_) => ErrorKind::InvalidInput,
            BeerError::StyleNotFound(_) | BeerError::PlaylistNotFound(_) => ErrorKind::NotFound,
            BeerError::EmptyStyleList => ErrorKind::EmptyCollection,
            BeerError::Upstream { .. } => ErrorKind::UpstreamFailure,
        }
    }

    /// Upstream failure without an underlying cause (e.g. a deadline).
    pub fn upstream(message: impl Into<String>) -> Self {
        BeerError::Upstream {
            message: message.into(),
            source: None,
        }
    }

    /// Upstream failure that keeps its cause for logging.
    pub fn upstream_with<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        BeerError::Upstream {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
