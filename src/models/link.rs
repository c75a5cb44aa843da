//! Wiki link token.

use serde::{Deserialize, Serialize};

/// A wiki link: the page it points to and its optional display text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Link {
    /// Page name the link points to
    pub target: String,

    /// Display text after the pipe (empty when the link is not piped)
    pub title: String,
}

impl Link {
    pub fn new(target: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            title: title.into(),
        }
    }

    /// Parse a link token, with or without the surrounding `[[ ]]`.
    ///
    /// Only the first `|` separates target from title; any further pipes
    /// stay in the title.
    pub fn parse(token: &str) -> Self {
        let inner = token.strip_prefix("[[").unwrap_or(token);
        let inner = inner.strip_suffix("]]").unwrap_or(inner);

        match inner.split_once('|') {
            Some((target, title)) => Self::new(target, title),
            None => Self::new(inner, ""),
        }
    }
}
