//! In-memory `WikiSource` for pipeline tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::services::WikiSource;

pub const UPDATE_TIMES_HTML: &str = include_str!("../../tests/fixtures/local_update_times.html");
pub const NOMINATION_HTML: &str = include_str!("../../tests/fixtures/main_street_vehicles.html");

#[derive(Default)]
pub struct FakeSource {
    pages: HashMap<String, String>,
    wikitexts: HashMap<String, String>,
    backlinks: HashMap<String, Vec<String>>,
}

impl FakeSource {
    pub fn with_page(mut self, title: &str, html: &str) -> Self {
        self.pages.insert(title.to_string(), html.to_string());
        self
    }

    pub fn with_wikitext(mut self, title: &str, wikitext: &str) -> Self {
        self.wikitexts.insert(title.to_string(), wikitext.to_string());
        self
    }

    pub fn with_backlinks(mut self, title: &str, links: &[&str]) -> Self {
        self.backlinks
            .insert(title.to_string(), links.iter().map(|s| s.to_string()).collect());
        self
    }
}

fn missing(what: &str, title: &str) -> AppError {
    AppError::api(format!("missingtitle: no {what} for {title}"))
}

#[async_trait]
impl WikiSource for FakeSource {
    async fn page_html(&self, title: &str) -> Result<String> {
        self.pages
            .get(title)
            .cloned()
            .ok_or_else(|| missing("page", title))
    }

    async fn wikitext(&self, title: &str) -> Result<String> {
        self.wikitexts
            .get(title)
            .cloned()
            .ok_or_else(|| missing("wikitext", title))
    }

    async fn backlinks(&self, title: &str) -> Result<Vec<String>> {
        Ok(self.backlinks.get(title).cloned().unwrap_or_default())
    }
}
