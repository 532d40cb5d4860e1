//! Spotify-backed playlist provider.

mod client;
mod error;
mod gateway;
mod models;

pub use client::{DEFAULT_API_BASE, DEFAULT_TOKEN_URL, SpotifyClient};
pub use error::SpotifyError;
pub use gateway::{SEARCH_LIMIT, SpotifyPlaylistGateway, TRACK_LIMIT};
