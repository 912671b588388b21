use crate::auth::callback::AuthorizationCode;
use crate::auth::callback::CallbackListener;
use crate::auth::callback::PendingCode;
use crate::credentials::Credentials;
use crate::endpoints::Endpoints;
use crate::endpoints::SCOPES;
use eyre::Result;
use eyre::bail;
use open::that as open_browser;
use tracing::debug;
use tracing::info;
use tracing::warn;
use url::Url;

/// Consent page URL the user is sent to.
pub fn authorization_url(credentials: &Credentials, endpoints: &Endpoints) -> Result<Url> {
    Ok(Url::parse_with_params(
        &endpoints.authorize,
        &[
            ("client_id", credentials.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", endpoints.redirect_uri.as_str()),
            ("scope", SCOPES),
        ],
    )?)
}

/// Send the user through the consent page and wait for the redirect to come back.
///
/// Blocks until one request reaches the callback listener.
pub async fn authorize(credentials: &Credentials, endpoints: &Endpoints) -> Result<AuthorizationCode> {
    let auth_url = authorization_url(credentials, endpoints)?;
    let listener = CallbackListener::bind(&endpoints.callback_addr()?).await?;

    println!("Opening browser for Spotify authorization...");
    println!("If the browser does not open, visit this URL:\n{}\n", auth_url);
    info!("Opening browser for auth");
    if let Err(e) = open_browser(auth_url.as_str()) {
        warn!("Could not open a browser: {}", e);
    }

    println!("Waiting for authorization...");
    await_code(listener.spawn()).await
}

/// Wait for the callback and insist that it carried a code.
pub async fn await_code(pending: PendingCode) -> Result<AuthorizationCode> {
    match pending.wait().await? {
        Some(code) => {
            debug!("Authorization code: len={}", code.0.len());
            Ok(code)
        }
        None => bail!("Failed to get authorization code"),
    }
}
