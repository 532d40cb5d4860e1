//! StubPlaylistGateway - deterministic stand-in for the real provider.
//!
//! Used when no provider credentials are configured or the provider cannot
//! be reached at startup, so recommendations keep their shape.

use async_trait::async_trait;

use crate::domain::{BeerError, Playlist, Track};
use crate::ports::PlaylistGateway;

#[derive(Debug, Clone, Copy, Default)]
pub struct StubPlaylistGateway;

impl StubPlaylistGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlaylistGateway for StubPlaylistGateway {
    async fn find_playlist_by_style(&self, style_name: &str) -> Result<Playlist, BeerError> {
        Ok(Playlist::new(
            format!("{style_name} Playlist (stub)"),
            vec![Track::new("Stub Song", "Stub Artist", "https://open.spotify.com")],
        ))
    }
}
