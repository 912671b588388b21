use serde::Deserialize;

/// One page of a paginated listing.
/// https://developer.spotify.com/documentation/web-api/concepts/api-calls#pagination
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// Link to the following page, treating an empty string like a missing one.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }
}
