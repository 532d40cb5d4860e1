//! Playlist lookup on top of a [`PlaylistSearch`] backend.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::{BeerError, Playlist};
use crate::ports::{PlaylistGateway, PlaylistSearch};

/// Only the best search hit is used.
pub const SEARCH_LIMIT: u32 = 1;
pub const TRACK_LIMIT: u32 = 10;

/// Finds the first playlist matching a style name and lists its tracks.
///
/// A failing track listing does not fail the lookup: the playlist is
/// returned without tracks.
pub struct SpotifyPlaylistGateway<S> {
    search: S,
}

impl<S: PlaylistSearch> SpotifyPlaylistGateway<S> {
    pub fn new(search: S) -> Self {
        Self { search }
    }
}

#[async_trait]
impl<S: PlaylistSearch> PlaylistGateway for SpotifyPlaylistGateway<S> {
    async fn find_playlist_by_style(&self, style_name: &str) -> Result<Playlist, BeerError> {
        let found = self.search.search_playlists(style_name, SEARCH_LIMIT).await?;
        let Some(summary) = found.into_iter().next() else {
            return Err(BeerError::PlaylistNotFound(style_name.to_string()));
        };

        match self.search.playlist_tracks(&summary.id, TRACK_LIMIT).await {
            Ok(tracks) => {
                debug!(style = style_name, playlist = %summary.name, tracks = tracks.len(), "playlist found");
                Ok(Playlist::new(summary.name, tracks))
            }
            Err(err) => {
                warn!(style = style_name, playlist_id = %summary.id, error = %err, "could not list playlist tracks");
                Ok(Playlist::without_tracks(summary.name))
            }
        }
    }
}
