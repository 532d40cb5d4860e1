//! AppBuilder - wires configuration into the use cases.
//!
//! The playlist provider is chosen once, here: the Spotify provider when
//! credentials are configured and accepted, the stand-in otherwise. The
//! chosen provider is always wrapped in the TTL cache.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use super::catalog::StyleCatalog;
use super::recommend::Recommender;
use crate::config::{Config, ConfigError, SpotifyCredentials};
use crate::impls::{
    CachedPlaylistGateway, InMemoryStyleRepository, MokaCache, SpotifyClient,
    SpotifyError, SpotifyPlaylistGateway, StubPlaylistGateway,
};
use crate::ports::{IdGenerator, PlaylistGateway, StyleRepository, SystemClock, UlidGenerator};

/// Which playlist provider ended up behind the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Spotify,
    Stub,
    /// Supplied through [`AppBuilder::with_playlist_provider`].
    Custom,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProviderKind::Spotify => "spotify",
            ProviderKind::Stub => "stub",
            ProviderKind::Custom => "custom",
        })
    }
}

/// # Example
/// ```ignore
/// let app = AppBuilder::from_env()?.build().await;
/// let rec = app.recommender.recommend(-3.0).await?;
/// ```
pub struct AppBuilder {
    config: Config,
    playlist_provider: Option<Arc<dyn PlaylistGateway>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
    spotify_endpoints: Option<(String, String)>,
}

impl AppBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            playlist_provider: None,
            id_generator: None,
            spotify_endpoints: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Skip provider selection and put `provider` behind the cache.
    pub fn with_playlist_provider(mut self, provider: Arc<dyn PlaylistGateway>) -> Self {
        self.playlist_provider = Some(provider);
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(ids);
        self
    }

    /// Token and API endpoints used instead of the public Spotify ones.
    pub fn with_spotify_endpoints(
        mut self,
        token_url: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        self.spotify_endpoints = Some((token_url.into(), api_base.into()));
        self
    }

    pub async fn build(self) -> App {
        let config = self.config;

        let styles: Arc<dyn StyleRepository> = Arc::new(InMemoryStyleRepository::with_capacity(
            config.style_store_capacity,
        ));
        let ids = self
            .id_generator
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(SystemClock)));

        let (provider, provider_kind) = match self.playlist_provider {
            Some(provider) => (provider, ProviderKind::Custom),
            None => select_provider(&config, self.spotify_endpoints).await,
        };
        let playlists: Arc<dyn PlaylistGateway> = Arc::new(CachedPlaylistGateway::new(
            provider,
            MokaCache::with_max_cost(config.playlist_cache_capacity),
            config.playlist_ttl,
        ));

        info!(
            provider = %provider_kind,
            playlist_ttl_secs = config.playlist_ttl.as_secs(),
            "application wired"
        );

        App {
            catalog: StyleCatalog::new(styles.clone(), ids),
            recommender: Recommender::new(styles, playlists, config.provider_timeout),
            provider: provider_kind,
        }
    }
}

async fn select_provider(
    config: &Config,
    endpoints: Option<(String, String)>,
) -> (Arc<dyn PlaylistGateway>, ProviderKind) {
    let stub = || -> (Arc<dyn PlaylistGateway>, ProviderKind) {
        (Arc::new(StubPlaylistGateway::new()), ProviderKind::Stub)
    };

    let Some(credentials) = config.spotify.clone() else {
        warn!("spotify credentials not configured, using stub playlist provider");
        return stub();
    };

    match connect_spotify(credentials, config, endpoints).await {
        Ok(client) => {
            info!("spotify playlist provider connected");
            (
                Arc::new(SpotifyPlaylistGateway::new(client)),
                ProviderKind::Spotify,
            )
        }
        Err(err) => {
            warn!(error = %err, "spotify unavailable, using stub playlist provider");
            stub()
        }
    }
}

async fn connect_spotify(
    credentials: SpotifyCredentials,
    config: &Config,
    endpoints: Option<(String, String)>,
) -> Result<SpotifyClient, SpotifyError> {
    let mut client = SpotifyClient::new(credentials, config.provider_timeout)?;
    if let Some((token_url, api_base)) = endpoints {
        client = client.with_endpoints(token_url, api_base);
    }
    client.connect().await
}

/// The wired use cases.
#[derive(Clone)]
pub struct App {
    pub catalog: StyleCatalog,
    pub recommender: Recommender,
    pub provider: ProviderKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::seed::seed_defaults;
    use crate::domain::{BeerError, Playlist};
    use async_trait::async_trait;
    use mockito::Server;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PlaylistGateway for CountingProvider {
        async fn find_playlist_by_style(&self, style_name: &str) -> Result<Playlist, BeerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Playlist::without_tracks(format!("{style_name} mix")))
        }
    }

    fn with_credentials() -> Config {
        Config {
            spotify: Some(SpotifyCredentials {
                client_id: "id".into(),
                client_secret: "wrong".into(),
            }),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn no_credentials_selects_stub() {
        let app = AppBuilder::new(Config::default()).build().await;
        assert_eq!(app.provider, ProviderKind::Stub);
    }

    #[tokio::test]
    async fn rejected_credentials_fall_back_to_stub() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/token")
            .with_status(401)
            .create_async()
            .await;

        let app = AppBuilder::new(with_credentials())
            .with_spotify_endpoints(format!("{}/api/token", server.url()), server.url())
            .build()
            .await;
        assert_eq!(app.provider, ProviderKind::Stub);

        seed_defaults(&app.catalog).await.unwrap();
        let rec = app.recommender.recommend(-7.0).await.unwrap();
        assert!(rec.playlist.name.ends_with("(stub)"));
    }

    #[tokio::test]
    async fn accepted_credentials_select_spotify() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/token")
            .with_status(200)
            .with_body(r#"{"access_token":"tok","expires_in":3600}"#)
            .create_async()
            .await;

        let app = AppBuilder::new(with_credentials())
            .with_spotify_endpoints(format!("{}/api/token", server.url()), server.url())
            .build()
            .await;
        assert_eq!(app.provider, ProviderKind::Spotify);
    }

    #[tokio::test]
    async fn custom_provider_sits_behind_the_cache() {
        let provider = Arc::new(CountingProvider::default());
        let app = AppBuilder::new(Config::default())
            .with_playlist_provider(provider.clone())
            .build()
            .await;
        assert_eq!(app.provider, ProviderKind::Custom);

        seed_defaults(&app.catalog).await.unwrap();
        let first = app.recommender.recommend(-7.0).await.unwrap();
        let second = app.recommender.recommend(-7.0).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}
