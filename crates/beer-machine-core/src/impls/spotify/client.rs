//! Spotify Web API client (client-credentials flow).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;

use super::error::SpotifyError;
use super::models::{Page, PlaylistItem, SearchResponse, TokenResponse, tracks_from_page};
use crate::config::SpotifyCredentials;
use crate::domain::{BeerError, Track};
use crate::ports::{PlaylistSearch, PlaylistSummary};

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";

/// Tokens are refreshed this long before Spotify says they expire.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(30);

struct AccessToken {
    value: String,
    refresh_at: Instant,
}

impl AccessToken {
    fn from_response(response: TokenResponse) -> Self {
        let lifetime = Duration::from_secs(response.expires_in).saturating_sub(TOKEN_REFRESH_MARGIN);
        Self {
            value: response.access_token,
            refresh_at: Instant::now() + lifetime,
        }
    }

    fn is_fresh(&self) -> bool {
        Instant::now() < self.refresh_at
    }
}

pub struct SpotifyClient {
    http: reqwest::Client,
    credentials: SpotifyCredentials,
    token: Mutex<Option<AccessToken>>,
    token_url: String,
    api_base: String,
}

impl SpotifyClient {
    /// Build a client; no request is made until the first call.
    ///
    /// `request_timeout` bounds every HTTP request, token exchange included.
    pub fn new(
        credentials: SpotifyCredentials,
        request_timeout: Duration,
    ) -> Result<Self, SpotifyError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            http,
            credentials,
            token: Mutex::new(None),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Point the client at other endpoints (a proxy or a local mock).
    pub fn with_endpoints(mut self, token_url: impl Into<String>, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        self.token_url = token_url.into();
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Perform the initial token exchange, so bad credentials are reported
    /// up front instead of on the first lookup.
    pub async fn connect(self) -> Result<Self, SpotifyError> {
        self.access_token().await?;
        Ok(self)
    }

    /// Exchange credentials for a token, or reuse the cached one.
    pub async fn access_token(&self) -> Result<String, SpotifyError> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value.clone());
        }

        debug!(url = %self.token_url, "requesting spotify access token");
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        let body: TokenResponse = check_status(response).await?.json().await?;

        let token = AccessToken::from_response(body);
        let value = token.value.clone();
        *guard = Some(token);
        Ok(value)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, SpotifyError> {
        let token = self.access_token().await?;
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        match check_status(response).await {
            Ok(response) => Ok(response.json::<T>().await?),
            Err(err) => {
                if err.is_auth_error() {
                    // revoked token: force a new exchange on the next call
                    self.token.lock().await.take();
                }
                Err(err)
            }
        }
    }

    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<PlaylistSummary>, SpotifyError> {
        let url = format!("{}/search", self.api_base);
        let params = [
            ("q", query.to_string()),
            ("type", "playlist".to_string()),
            ("limit", limit.to_string()),
        ];
        let response: SearchResponse = self.get_json(&url, &params).await?;
        Ok(response.into_summaries())
    }

    pub async fn tracks(&self, playlist_id: &str, limit: u32) -> Result<Vec<Track>, SpotifyError> {
        let url = format!("{}/playlists/{}/tracks", self.api_base, playlist_id);
        let page: Page<PlaylistItem> = self.get_json(&url, &[("limit", limit.to_string())]).await?;
        Ok(tracks_from_page(page))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(SpotifyError::from_status_code(status.as_u16(), message))
}

#[async_trait]
impl PlaylistSearch for SpotifyClient {
    async fn search_playlists(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<PlaylistSummary>, BeerError> {
        Ok(self.search(query, limit).await?)
    }

    async fn playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Vec<Track>, BeerError> {
        Ok(self.tracks(playlist_id, limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn credentials() -> SpotifyCredentials {
        SpotifyCredentials {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
        }
    }

    fn client_for(server: &Server) -> SpotifyClient {
        SpotifyClient::new(credentials(), Duration::from_secs(5))
            .unwrap()
            .with_endpoints(format!("{}/api/token", server.url()), format!("{}/v1", server.url()))
    }

    const TOKEN_BODY: &str = r#"{"access_token":"tok","token_type":"Bearer","expires_in":3600}"#;

    #[tokio::test]
    async fn token_is_exchanged_once_and_reused() {
        let mut server = Server::new_async().await;
        let token = server
            .mock("POST", "/api/token")
            .match_body(Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TOKEN_BODY)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(client.access_token().await.unwrap(), "tok");
        assert_eq!(client.access_token().await.unwrap(), "tok");
        token.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_credentials_are_unauthorized() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/token")
            .with_status(401)
            .with_body(r#"{"error":"invalid_client"}"#)
            .create_async()
            .await;

        let err = client_for(&server).access_token().await.unwrap_err();
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn search_sends_bearer_token_and_skips_nulls() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/token")
            .with_status(200)
            .with_body(TOKEN_BODY)
            .create_async()
            .await;
        server
            .mock("GET", Matcher::Regex(r"^/v1/search".into()))
            .match_header("authorization", "Bearer tok")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "IPA".into()),
                Matcher::UrlEncoded("type".into(), "playlist".into()),
                Matcher::UrlEncoded("limit".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"playlists":{"items":[null,{"id":"p1","name":"Hop Hits"}]}}"#)
            .create_async()
            .await;

        let found = client_for(&server).search("IPA", 1).await.unwrap();
        assert_eq!(
            found,
            vec![PlaylistSummary {
                id: "p1".into(),
                name: "Hop Hits".into()
            }]
        );
    }

    #[tokio::test]
    async fn rate_limit_maps_to_upstream_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/token")
            .with_status(200)
            .with_body(TOKEN_BODY)
            .create_async()
            .await;
        server
            .mock("GET", Matcher::Regex(r"^/v1/playlists/p1/tracks".into()))
            .with_status(429)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.tracks("p1", 10).await,
            Err(SpotifyError::RateLimited)
        ));

        let err = client.playlist_tracks("p1", 10).await.unwrap_err();
        assert_eq!(err.kind(), crate::domain::ErrorKind::UpstreamFailure);
    }

    #[tokio::test]
    async fn unauthorized_api_call_drops_cached_token() {
        let mut server = Server::new_async().await;
        let token = server
            .mock("POST", "/api/token")
            .with_status(200)
            .with_body(TOKEN_BODY)
            .expect(2)
            .create_async()
            .await;
        server
            .mock("GET", Matcher::Regex(r"^/v1/search".into()))
            .with_status(401)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(client.search("IPA", 1).await.unwrap_err().is_auth_error());
        client.access_token().await.unwrap();
        token.assert_async().await;
    }
}
