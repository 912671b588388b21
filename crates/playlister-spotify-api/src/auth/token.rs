use crate::auth::callback::AuthorizationCode;
use crate::bearer_token::BearerToken;
use crate::credentials::Credentials;
use crate::endpoints::Endpoints;
use eyre::Result;
use eyre::WrapErr;
use eyre::bail;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::debug;

/// Trade the authorization code for an access token. One request, no retry.
pub async fn exchange_code(
    credentials: &Credentials,
    endpoints: &Endpoints,
    code: AuthorizationCode,
) -> Result<BearerToken> {
    let client = reqwest::Client::new();
    let resp = client
        .post(&endpoints.token)
        .header(AUTHORIZATION, credentials.basic_authorization())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code.0.as_str()),
            ("redirect_uri", endpoints.redirect_uri.as_str()),
        ])
        .send()
        .await
        .wrap_err("Failed to send token request")?;

    let status = resp.status();
    let body = resp.text().await?;
    if status != StatusCode::OK {
        bail!("Error getting access token ({}): {}", status, body);
    }

    let resp: TokenResponse = serde_json::from_str(&body)
        .wrap_err_with(|| format!("Failed to deserialize:\n{}", body))?;

    debug!("Access Token: len={}", resp.access_token.len());
    debug!("Token type: {}", resp.token_type);
    if let Some(scope) = &resp.scope {
        debug!("Scope: {}", scope);
    }
    if let Some(expires_in) = resp.expires_in {
        debug!("Expires in: {}s", expires_in);
    }

    Ok(BearerToken(resp.access_token))
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: String,
    scope: Option<String>,
    expires_in: Option<u64>,
}
