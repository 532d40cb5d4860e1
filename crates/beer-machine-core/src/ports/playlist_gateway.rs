//! PlaylistGateway port - playlist lookup by beer style name.
//!
//! Implementations: the real provider (`impls::spotify`), the stand-in
//! (`impls::stub_gateway`) and the caching decorator
//! (`impls::cached_gateway`), which wraps either of the other two.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{BeerError, Playlist};

/// PlaylistGateway finds a playlist for a beer style.
#[async_trait]
pub trait PlaylistGateway: Send + Sync {
    async fn find_playlist_by_style(&self, style_name: &str) -> Result<Playlist, BeerError>;
}

#[async_trait]
impl<G: PlaylistGateway + ?Sized> PlaylistGateway for Arc<G> {
    async fn find_playlist_by_style(&self, style_name: &str) -> Result<Playlist, BeerError> {
        (**self).find_playlist_by_style(style_name).await
    }
}
