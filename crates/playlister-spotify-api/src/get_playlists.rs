use crate::bearer_token::BearerToken;
use crate::endpoints::Endpoints;
use crate::fetch::fetch;
use crate::page::Page;
use crate::playlist::Playlist;
use tracing::debug;

/// Every playlist of the current user, in the order the API pages them out.
///
/// Follows `next` until it runs out. The first failing page aborts the whole listing.
/// https://developer.spotify.com/documentation/web-api/reference/get-a-list-of-current-users-playlists
pub async fn get_current_user_playlists(
    endpoints: &Endpoints,
    bearer: &BearerToken,
) -> eyre::Result<Vec<Playlist>> {
    let client = reqwest::Client::new();
    let mut playlists = Vec::new();
    let mut url = Some(endpoints.playlists.clone());

    while let Some(current) = url {
        let page: Page<Playlist> = fetch(&client, &current, bearer).await?;
        debug!(
            "Fetched {} playlists from {} (total {:?})",
            page.items.len(),
            current,
            page.total
        );
        url = page.next_url().map(str::to_string);
        playlists.extend(page.items);
    }

    Ok(playlists)
}
