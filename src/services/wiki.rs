// src/services/wiki.rs

//! Access to the wiki: rendered pages, wikitext, and backlinks.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ApiConfig;
use crate::models::api::{ErrorResponse, LinksHereResponse, ParseResponse};
use crate::utils::http::{create_async_client, fetch_text};
use crate::utils::{title_to_path, with_params};

/// Source of wiki page content.
#[async_trait]
pub trait WikiSource: Send + Sync {
    /// Rendered HTML of a page.
    async fn page_html(&self, title: &str) -> Result<String>;

    /// Raw wikitext of a page.
    async fn wikitext(&self, title: &str) -> Result<String>;

    /// Titles of pages linking to `title`, in API order.
    async fn backlinks(&self, title: &str) -> Result<Vec<String>>;
}

/// `WikiSource` backed by a MediaWiki site over HTTP.
pub struct WikiClient {
    client: Client,
    api_url: Url,
    index_url: Url,
    backlink_namespace: String,
    backlink_limit: String,
}

impl WikiClient {
    /// Create a client for the site configured in `config`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        Ok(Self {
            client: create_async_client(config)?,
            api_url: base.join("/w/api.php")?,
            index_url: base.join("/w/index.php")?,
            backlink_namespace: config.backlink_namespace.to_string(),
            backlink_limit: config.backlink_limit.to_string(),
        })
    }

    fn page_url(&self, title: &str) -> Url {
        let path = title_to_path(title);
        with_params(&self.index_url, &[("title", path.as_str())])
    }

    fn wikitext_url(&self, title: &str) -> Url {
        with_params(
            &self.api_url,
            &[
                ("action", "parse"),
                ("format", "json"),
                ("page", title),
                ("prop", "wikitext"),
                ("formatversion", "2"),
            ],
        )
    }

    fn backlinks_url(&self, title: &str) -> Url {
        with_params(
            &self.api_url,
            &[
                ("action", "query"),
                ("format", "json"),
                ("prop", "linkshere"),
                ("titles", title),
                ("formatversion", "2"),
                ("lhnamespace", self.backlink_namespace.as_str()),
                ("lhlimit", self.backlink_limit.as_str()),
            ],
        )
    }
}

/// Decode an API response body, turning an API-level error into `AppError::Api`.
fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    if let Ok(ErrorResponse { error }) = serde_json::from_str::<ErrorResponse>(body) {
        return Err(AppError::api(format!("{}: {}", error.code, error.info)));
    }
    Ok(serde_json::from_str(body)?)
}

/// Backlink titles from a `linkshere` response for a single page.
fn backlink_titles(response: LinksHereResponse, title: &str) -> Result<Vec<String>> {
    if !response.batchcomplete {
        log::warn!("Incomplete batch for backlinks of {title}");
    }
    let mut pages = response.query.pages;
    if pages.len() != 1 {
        return Err(AppError::api(format!(
            "expected 1 page in backlinks of {title}, got {}",
            pages.len()
        )));
    }
    let page = pages.remove(0);
    Ok(page.linkshere.into_iter().map(|link| link.title).collect())
}

#[async_trait]
impl WikiSource for WikiClient {
    async fn page_html(&self, title: &str) -> Result<String> {
        log::info!("Fetching page {title}");
        fetch_text(&self.client, self.page_url(title)).await
    }

    async fn wikitext(&self, title: &str) -> Result<String> {
        log::info!("Fetching wikitext of {title}");
        let body = fetch_text(&self.client, self.wikitext_url(title)).await?;
        let response: ParseResponse = decode_response(&body)?;
        Ok(response.parse.wikitext)
    }

    async fn backlinks(&self, title: &str) -> Result<Vec<String>> {
        log::info!("Fetching backlinks of {title}");
        let body = fetch_text(&self.client, self.backlinks_url(title)).await?;
        let response: LinksHereResponse = decode_response(&body)?;
        let titles = backlink_titles(response, title)?;
        log::debug!("{} backlinks for {title}", titles.len());
        Ok(titles)
    }
}
