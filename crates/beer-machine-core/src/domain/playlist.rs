//! Playlist value objects returned by the playlist gateway.

use serde::{Deserialize, Serialize};

/// A music track inside a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub link: String,
}

impl Track {
    pub fn new(name: impl Into<String>, artist: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            link: link.into(),
        }
    }
}

/// A playlist: a name and an ordered list of tracks.
///
/// No identity beyond structural equality; cached by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    /// A playlist that was found but whose tracks could not be listed.
    pub fn without_tracks(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

/// Result of a recommendation: the chosen style's name and its playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub beer_style: String,
    pub playlist: Playlist,
}
