use serde::Deserialize;
use serde::Serialize;

/// A playlist exactly as the API returned it.
///
/// Kept as raw JSON so the saved file holds every field. [`Playlist::summary`]
/// gives a typed view of the handful of fields shown on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist(pub serde_json::Value);

impl Playlist {
    pub fn summary(&self) -> eyre::Result<PlaylistSummary> {
        Ok(PlaylistSummary::deserialize(&self.0)?)
    }
}

/// https://developer.spotify.com/documentation/web-api/reference/get-a-list-of-current-users-playlists
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct PlaylistSummary {
    #[serde(default)]
    pub name: String,
    pub public: Option<bool>,
    pub tracks: Option<TracksRef>,
    pub owner: Option<Owner>,
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct TracksRef {
    #[serde(default)]
    pub total: u64,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Owner {
    pub display_name: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

impl PlaylistSummary {
    pub fn track_count(&self) -> u64 {
        self.tracks.as_ref().map_or(0, |t| t.total)
    }

    pub fn owner_name(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|o| o.display_name.as_deref())
            .unwrap_or("unknown")
    }

    /// Null and missing both count as private.
    pub fn is_public(&self) -> bool {
        self.public.unwrap_or(false)
    }

    pub fn url(&self) -> &str {
        self.external_urls
            .as_ref()
            .and_then(|u| u.spotify.as_deref())
            .unwrap_or_default()
    }
}
