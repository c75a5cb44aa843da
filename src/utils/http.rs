// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use url::Url;

use crate::error::Result;
use crate::models::ApiConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a URL and return its body, failing on non-success status codes.
pub async fn fetch_text(client: &reqwest::Client, url: Url) -> Result<String> {
    log::debug!("GET {url}");
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}
