//! Wire models of the Spotify Web API responses we read.
//!
//! Only the fields the gateway needs are declared. Spotify may return `null`
//! entries inside item lists, hence the `Option` items.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::Track;
use crate::ports::PlaylistSummary;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub playlists: Option<Page<Option<PlaylistObject>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistObject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackObject {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistObject {
    pub name: String,
}

impl SearchResponse {
    pub fn into_summaries(self) -> Vec<PlaylistSummary> {
        self.playlists
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|p| PlaylistSummary {
                id: p.id,
                name: p.name,
            })
            .collect()
    }
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Self {
        let artist = track
            .artists
            .into_iter()
            .next()
            .map(|a| a.name)
            .unwrap_or_default();
        let link = track
            .external_urls
            .get("spotify")
            .cloned()
            .unwrap_or_default();
        Track {
            name: track.name,
            artist,
            link,
        }
    }
}

pub(crate) fn tracks_from_page(page: Page<PlaylistItem>) -> Vec<Track> {
    page.items
        .into_iter()
        .filter_map(|item| item.track)
        .map(Track::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_skips_null_playlists() {
        let json = r#"{
            "playlists": {
                "items": [null, {"id": "p1", "name": "IPA Vibes", "owner": {"id": "x"}}]
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_summaries(),
            vec![PlaylistSummary {
                id: "p1".into(),
                name: "IPA Vibes".into()
            }]
        );
    }

    #[test]
    fn search_without_playlists_section_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_summaries().is_empty());
    }

    #[test]
    fn tracks_use_first_artist_and_spotify_link() {
        let json = r#"{
            "items": [
                {"track": {
                    "name": "Song A",
                    "artists": [{"name": "First"}, {"name": "Second"}],
                    "external_urls": {"spotify": "https://open.spotify.com/track/a"}
                }},
                {"track": null},
                {"track": {"name": "Song B", "artists": [], "external_urls": {}}}
            ]
        }"#;
        let page: Page<PlaylistItem> = serde_json::from_str(json).unwrap();
        let tracks = tracks_from_page(page);

        assert_eq!(
            tracks,
            vec![
                Track::new("Song A", "First", "https://open.spotify.com/track/a"),
                Track::new("Song B", "", ""),
            ]
        );
    }
}
