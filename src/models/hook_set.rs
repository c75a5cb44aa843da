//! Hook set (queue or preparation area) data structures.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Hook;

/// The two kinds of staging page a hook set can live on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HookSetKind {
    Queue,
    Prep,
}

impl HookSetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookSetKind::Queue => "Queue",
            HookSetKind::Prep => "Prep",
        }
    }
}

/// Short label for a hook set, displayed as `Queue 6` or `Prep 1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HookSetKey {
    pub kind: HookSetKind,
    pub number: u32,
}

impl HookSetKey {
    pub fn new(kind: HookSetKind, number: u32) -> Self {
        Self { kind, number }
    }

    pub fn queue(number: u32) -> Self {
        Self::new(HookSetKind::Queue, number)
    }

    pub fn prep(number: u32) -> Self {
        Self::new(HookSetKind::Prep, number)
    }
}

impl fmt::Display for HookSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.as_str(), self.number)
    }
}

/// The content of one queue or preparation-area page at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HookSet {
    /// Page title, e.g. `Template:Did you know/Queue/6`
    pub title: String,

    /// Raw wikitext of the page
    pub wikitext: String,

    /// Hooks found between the hook markers, in page order
    pub hooks: Vec<Hook>,

    /// Article title to nomination page title, from the credit templates
    pub nomination_map: HashMap<String, String>,
}

impl HookSet {
    /// Derive the short label from the title.
    pub fn key(&self) -> Option<HookSetKey> {
        crate::services::hook_set_key(&self.title)
    }

    /// Nomination title for an article, if a credit line named one.
    pub fn nomination_for(&self, article: &str) -> Option<&str> {
        self.nomination_map.get(article).map(String::as_str)
    }
}
