//! PlaylistSearch port - the raw operations of a music catalogue API.
//!
//! This is the contract the real playlist provider needs from its HTTP
//! client: search playlists by free text, then list one playlist's tracks.

use async_trait::async_trait;

use crate::domain::{BeerError, Track};

/// A playlist as returned by a search, before its tracks are fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

#[async_trait]
pub trait PlaylistSearch: Send + Sync {
    /// Search playlists matching `query`, at most `limit` results.
    async fn search_playlists(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<PlaylistSummary>, BeerError>;

    /// List up to `limit` tracks of the playlist `playlist_id`.
    async fn playlist_tracks(&self, playlist_id: &str, limit: u32)
    -> Result<Vec<Track>, BeerError>;
}
