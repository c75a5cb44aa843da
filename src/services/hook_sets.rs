// src/services/hook_sets.rs

//! Hook set extraction from queue and prep wikitext.
//!
//! A queue/prep page keeps its hooks between two marker comments, each alone
//! on its line:
//!
//! ```text
//! <!--Hooks-->
//! {{main page image/DYK|...}}
//! * ... that '''[[foo]]''' blah?
//! <!--HooksEnd-->
//! ```
//!
//! Credit lines (`* {{DYKmake|Article|Author|subpage=Nomination}}`) may appear
//! anywhere on the page and link each article to its nomination.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{Hook, HookSet, ParserConfig};

const HOOK_PREFIX: &str = "* ... ";

static HOOKS_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^<!--Hooks-->$").expect("start marker pattern is valid"));
static HOOKS_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^<!--HooksEnd-->$").expect("end marker pattern is valid"));

/// Extracts hooks and credits from the wikitext of a queue or prep page.
#[derive(Debug, Clone)]
pub struct HookSetExtractor {
    credit_line: Regex,
}

impl HookSetExtractor {
    /// Create an extractor recognizing credit templates whose names start
    /// with one of `prefixes`.
    pub fn new<S: AsRef<str>>(prefixes: &[S]) -> Result<Self> {
        if prefixes.is_empty() {
            return Err(AppError::config("no credit template prefixes given"));
        }
        let names = prefixes
            .iter()
            .map(|p| regex::escape(p.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r"^\*\s*\{{\{{(?:{names})[^|{{}}]*\|(?P<article>[^|{{}}]*)\|(?P<author>[^|{{}}]*)\|\s*subpage\s*=(?P<subpage>[^|{{}}]*)\}}\}}\s*$"
        );
        Ok(Self {
            credit_line: Regex::new(&pattern)?,
        })
    }

    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        Self::new(config.credit_templates.as_slice())
    }

    /// Lines between the hook markers, non-hook lines included.
    pub fn extract_hook_block<'a>(&self, wikitext: &'a str) -> Result<Vec<&'a str>> {
        let start = HOOKS_START
            .find(wikitext)
            .ok_or_else(|| AppError::parse("hook block", "missing <!--Hooks--> marker"))?;

        let rest = &wikitext[start.end()..];
        let Some(end) = HOOKS_END.find_iter(rest).last() else {
            let message = if HOOKS_END.is_match(wikitext) {
                "<!--HooksEnd--> appears before <!--Hooks-->"
            } else {
                "missing <!--HooksEnd--> marker"
            };
            return Err(AppError::parse("hook block", message));
        };

        let block = &rest[..end.start()];
        let block = block
            .strip_prefix("\r\n")
            .or_else(|| block.strip_prefix('\n'))
            .unwrap_or(block);
        Ok(block.lines().collect())
    }

    /// Hooks in the hook block, in page order.
    pub fn extract_hooks(&self, wikitext: &str) -> Result<Vec<Hook>> {
        let hooks = self
            .extract_hook_block(wikitext)?
            .into_iter()
            .filter(|line| line.starts_with(HOOK_PREFIX))
            .map(Hook::parse)
            .collect();
        Ok(hooks)
    }

    /// Article title to nomination title, from every credit line on the page.
    ///
    /// A later credit line for the same article replaces an earlier one.
    pub fn extract_nominations(&self, wikitext: &str) -> HashMap<String, String> {
        let mut nominations = HashMap::new();
        for line in wikitext.lines() {
            let Some(caps) = self.credit_line.captures(line) else {
                continue;
            };
            let article = caps["article"].trim().to_string();
            let subpage = caps["subpage"].trim().to_string();
            log::debug!(
                "Credit line for {:?} by {:?} -> {:?}",
                article,
                caps["author"].trim(),
                subpage
            );
            if let Some(previous) = nominations.insert(article, subpage) {
                log::debug!("Replacing earlier nomination {previous:?}");
            }
        }
        nominations
    }

    /// Build a hook set from a page title and its wikitext.
    pub fn build(&self, title: impl Into<String>, wikitext: impl Into<String>) -> Result<HookSet> {
        let title = title.into();
        let wikitext = wikitext.into();
        let hooks = self
            .extract_hooks(&wikitext)
            .map_err(|e| match e {
                AppError::Parse { message, .. } => AppError::parse(title.clone(), message),
                other => other,
            })?;
        let nomination_map = self.extract_nominations(&wikitext);

        Ok(HookSet {
            title,
            wikitext,
            hooks,
            nomination_map,
        })
    }
}
