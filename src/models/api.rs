//! Wire shapes of the MediaWiki action API responses we read.

use serde::{Deserialize, Serialize};

/// Response to `action=parse&prop=wikitext&formatversion=2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub parse: ParsedPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedPage {
    pub title: String,

    #[serde(default)]
    pub pageid: u64,

    pub wikitext: String,
}

/// Response to `action=query&prop=linkshere&formatversion=2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksHereResponse {
    #[serde(default)]
    pub batchcomplete: bool,

    pub query: LinksHereQuery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksHereQuery {
    pub pages: Vec<LinksHerePage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksHerePage {
    pub title: String,

    /// Absent when nothing links to the page
    #[serde(default)]
    pub linkshere: Vec<PageRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRef {
    pub title: String,
}

/// Error body the API returns instead of a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,

    #[serde(default)]
    pub info: String,
}
