//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Append query parameters to a URL.
pub fn with_params(base: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().extend_pairs(params);
    url
}

/// Wiki titles use underscores in URLs.
pub fn title_to_path(title: &str) -> String {
    title.trim().replace(' ', "_")
}
