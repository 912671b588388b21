use eyre::OptionExt;
use eyre::Result;
use url::Url;

pub const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const PLAYLISTS_URL: &str = "https://api.spotify.com/v1/me/playlists";
/// Must match the redirect URI registered for the app in the Spotify dashboard.
pub const REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const SCOPES: &str = "playlist-read-private playlist-read-collaborative";

/// Where each step of the flow talks to.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub authorize: String,
    pub token: String,
    pub playlists: String,
    pub redirect_uri: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authorize: AUTHORIZE_URL.to_string(),
            token: TOKEN_URL.to_string(),
            playlists: PLAYLISTS_URL.to_string(),
            redirect_uri: REDIRECT_URI.to_string(),
        }
    }
}

impl Endpoints {
    /// `host:port` the callback listener binds to, taken from the redirect URI.
    pub fn callback_addr(&self) -> Result<String> {
        let url = Url::parse(&self.redirect_uri)?;
        let host = url.host_str().ok_or_eyre("Invalid redirect URI")?;
        let port = url
            .port_or_known_default()
            .ok_or_eyre("Invalid redirect URI")?;
        Ok(format!("{}:{}", host, port))
    }
}
