//! Recommender - temperature in, style and playlist out.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{BeerError, BeerStyle, Recommendation, select_best};
use crate::ports::{PlaylistGateway, StyleRepository};

#[derive(Clone)]
pub struct Recommender {
    styles: Arc<dyn StyleRepository>,
    playlists: Arc<dyn PlaylistGateway>,
    provider_timeout: Duration,
}

impl Recommender {
    pub fn new(
        styles: Arc<dyn StyleRepository>,
        playlists: Arc<dyn PlaylistGateway>,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            styles,
            playlists,
            provider_timeout,
        }
    }

    /// The stored style whose average temperature is closest to `temperature`.
    pub async fn best_style(&self, temperature: f64) -> Result<BeerStyle, BeerError> {
        let styles = self.styles.find_all().await?;
        let best = select_best(&styles, temperature)?;
        debug!(temperature, style = best.name(), candidates = styles.len(), "style selected");
        Ok(best)
    }

    /// Pick the best style and look up its playlist.
    ///
    /// The playlist lookup is bounded by the provider timeout; running out
    /// of time is an upstream failure.
    pub async fn recommend(&self, temperature: f64) -> Result<Recommendation, BeerError> {
        let best = self.best_style(temperature).await?;

        let lookup = self.playlists.find_playlist_by_style(best.name());
        let playlist = tokio::time::timeout(self.provider_timeout, lookup)
            .await
            .map_err(|_| {
                BeerError::upstream(format!(
                    "playlist lookup for {:?} timed out after {:?}",
                    best.name(),
                    self.provider_timeout
                ))
            })??;

        info!(temperature, style = best.name(), playlist = %playlist.name, "recommendation ready");
        Ok(Recommendation {
            beer_style: best.name().to_string(),
            playlist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, Playlist, StyleId};
    use crate::impls::{InMemoryStyleRepository, StubPlaylistGateway};
    use async_trait::async_trait;

    struct SlowGateway;

    #[async_trait]
    impl PlaylistGateway for SlowGateway {
        async fn find_playlist_by_style(&self, style_name: &str) -> Result<Playlist, BeerError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Playlist::without_tracks(style_name))
        }
    }

    async fn store_with(styles: &[(&str, &str, f64, f64)]) -> Arc<dyn StyleRepository> {
        let repo = InMemoryStyleRepository::new();
        for (id, name, min, max) in styles {
            let style = BeerStyle::new(StyleId::new(*id), *name, *min, *max).unwrap();
            repo.create(style).await.unwrap();
        }
        Arc::new(repo)
    }

    #[tokio::test]
    async fn recommends_closest_style_with_its_playlist() {
        let styles = store_with(&[("1", "IPA", -7.0, 10.0), ("2", "Dunkel", -8.0, 2.0)]).await;
        let recommender =
            Recommender::new(styles, Arc::new(StubPlaylistGateway::new()), Duration::from_secs(1));

        let rec = recommender.recommend(-2.0).await.unwrap();
        assert_eq!(rec.beer_style, "Dunkel");
        assert_eq!(rec.playlist.name, "Dunkel Playlist (stub)");
    }

    #[tokio::test]
    async fn empty_store_is_empty_collection() {
        let recommender = Recommender::new(
            store_with(&[]).await,
            Arc::new(StubPlaylistGateway::new()),
            Duration::from_secs(1),
        );
        let err = recommender.recommend(5.0).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCollection);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_hits_the_deadline() {
        let recommender = Recommender::new(
            store_with(&[("1", "IPA", -7.0, 10.0)]).await,
            Arc::new(SlowGateway),
            Duration::from_millis(100),
        );
        let err = recommender.recommend(0.0).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
    }
}
