use crate::bearer_token::BearerToken;
use reqwest::StatusCode;

/// GET `url` with the bearer token and deserialize the body. Anything but a 200 is an error carrying the body.
pub async fn fetch<T>(client: &reqwest::Client, url: &str, bearer: &BearerToken) -> eyre::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let resp = client.get(url).bearer_auth(&bearer.0).send().await?;
    let status = resp.status();
    let res = resp.text().await?;

    if status != StatusCode::OK {
        eyre::bail!("Request to {} failed ({}): {}", url, status, res);
    }

    match serde_json::from_str(&res) {
        Ok(x) => Ok(x),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", res))),
    }
}
