use eyre::WrapErr;
use playlister_init::init;
use playlister_spotify_api::auth::authorization_code::authorize;
use playlister_spotify_api::auth::token::exchange_code;
use playlister_spotify_api::credentials::Credentials;
use playlister_spotify_api::endpoints::Endpoints;
use playlister_spotify_api::get_playlists::get_current_user_playlists;
use std::path::Path;
use tracing::info;

mod present;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    init()?;

    run(
        |name| std::env::var(name).ok(),
        &Endpoints::default(),
        Path::new(present::OUTPUT_FILE),
    )
    .await
}

/// The whole retrieval, start to finish. Credentials are checked before anything touches the network.
async fn run(
    lookup: impl Fn(&str) -> Option<String>,
    endpoints: &Endpoints,
    output: &Path,
) -> eyre::Result<()> {
    let credentials = Credentials::from_lookup(lookup)
        .wrap_err("Missing Spotify credentials in environment or .env file")?;

    println!("Spotify Playlist Retriever");
    println!("{}", "=".repeat(50));

    let code = authorize(&credentials, endpoints).await?;
    println!("Authorization code received");

    println!("Requesting access token...");
    let bearer = exchange_code(&credentials, endpoints, code).await?;
    println!("Access token received");

    println!("Fetching playlists...\n");
    let playlists = get_current_user_playlists(endpoints, &bearer).await?;
    info!("Fetched {} playlists", playlists.len());

    print!("{}", present::format_summary(&playlists)?);

    present::write_playlists(output, &playlists).await?;
    println!("\nFull playlist data saved to {}", output.display());

    Ok(())
}
