//! A single DYK hook line.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Link;

/// Non-greedy so that `'''[[a]]''' and '''[[b]]'''` yields two links.
static BOLD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'''(\[\[.*?\]\])'''").expect("bold link pattern is valid"));

/// One hook line and the bolded links found in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hook {
    /// The raw line, verbatim
    pub text: String,

    /// Every `'''[[...]]'''` link in the line, left to right
    pub links: Vec<Link>,
}

impl Hook {
    pub fn new(text: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            text: text.into(),
            links,
        }
    }

    /// Parse a hook line, collecting its bolded links.
    pub fn parse(line: &str) -> Self {
        let links = BOLD_LINK
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| Link::parse(m.as_str()))
            .collect();
        Self::new(line, links)
    }

    /// Target of the first bolded link, which names the hook's main article.
    pub fn first_target(&self) -> Option<&str> {
        self.links.first().map(|link| link.target.as_str())
    }
}
