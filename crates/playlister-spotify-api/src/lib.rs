pub mod bearer_token;
pub mod credentials;
pub mod endpoints;
pub mod fetch;
pub mod get_playlists;
pub mod page;
pub mod playlist;
pub mod auth {
    pub mod authorization_code;
    pub mod callback;
    pub mod token;
}
