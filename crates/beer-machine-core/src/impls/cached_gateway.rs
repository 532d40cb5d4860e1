//! CachedPlaylistGateway - TTL cache in front of another playlist gateway.
//!
//! ```text
//! find_playlist_by_style(name)
//!   -> cache hit (live entry)  -> return it, inner gateway untouched
//!   -> miss -> inner gateway -> Ok  -> cache for `ttl`, return
//!                            -> Err -> return the error, cache nothing
//! ```
//!
//! The decorator does not know whether the inner gateway is the real provider
//! or the stand-in; that choice is made once at startup.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{BeerError, Playlist};
use crate::impls::MokaCache;
use crate::ports::{PlaylistGateway, TtlCache};

/// Default lifetime of a cached playlist.
pub const DEFAULT_PLAYLIST_TTL: Duration = Duration::from_secs(10 * 60);

/// Namespace of playlist entries, so other kinds can share one cache.
pub const PLAYLIST_KEY_PREFIX: &str = "spotify:playlist:";

pub fn playlist_cache_key(style_name: &str) -> String {
    format!("{PLAYLIST_KEY_PREFIX}{style_name}")
}

pub struct CachedPlaylistGateway<G, C = MokaCache<String, Playlist>> {
    inner: G,
    cache: C,
    ttl: Duration,
}

impl<G, C> CachedPlaylistGateway<G, C>
where
    G: PlaylistGateway,
    C: TtlCache<String, Playlist>,
{
    pub fn new(inner: G, cache: C, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[async_trait]
impl<G, C> PlaylistGateway for CachedPlaylistGateway<G, C>
where
    G: PlaylistGateway,
    C: TtlCache<String, Playlist>,
{
    async fn find_playlist_by_style(&self, style_name: &str) -> Result<Playlist, BeerError> {
        let key = playlist_cache_key(style_name);

        if let Some(playlist) = self.cache.get(&key) {
            debug!(%key, "playlist cache hit");
            return Ok(playlist);
        }

        debug!(%key, "playlist cache miss");
        let playlist = self.inner.find_playlist_by_style(style_name).await?;
        self.cache.insert_with_ttl(key, playlist.clone(), self.ttl);
        Ok(playlist)
    }
}
