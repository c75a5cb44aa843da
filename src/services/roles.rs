// src/services/roles.rs

//! User role classification on a rendered nomination page.
//!
//! Each link to a user page is classified by the markup around it:
//! a "promoted by" paragraph marks the promoter, a tick icon in the same
//! paragraph or list item marks the approver, and a `div` mentioning
//! "nominations" marks the nominator.

use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::{UserRole, UserRoles};

const USER_PREFIX: &str = "/wiki/User:";

static CONTENT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.mw-parser-output").expect("content selector is valid")
});
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));
static APPROVAL_ICON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        r#"a[href*="Symbol_confirmed.svg"], a[href*="Symbol_voting_keep.svg"],
           img[src*="Symbol_confirmed.svg"], img[src*="Symbol_voting_keep.svg"]"#,
    )
    .expect("approval icon selector is valid")
});

static USER_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/wiki/User:[^/#]+(?:#.*)?$").expect("user href pattern is valid")
});
static PROMOTED_BY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"promoted\s+by").expect("promoter pattern is valid"));
static NOMINATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnominations\b").expect("nominator pattern is valid"));

/// Whether an anchor links to a top-level user page.
pub fn is_user_anchor(anchor: &ElementRef<'_>) -> bool {
    anchor
        .value()
        .attr("href")
        .is_some_and(|href| USER_HREF.is_match(href))
}

/// All links to user pages in the page content, in document order.
///
/// On a full skin page only the outermost `div.mw-parser-output` is searched,
/// so site notices and navigation are ignored. A bare fragment is searched
/// whole.
pub fn find_user_anchors(document: &Html) -> Vec<ElementRef<'_>> {
    let content = document
        .select(&CONTENT_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());
    content
        .select(&ANCHOR_SELECTOR)
        .filter(is_user_anchor)
        .collect()
}

/// Username a user-page anchor points to.
pub fn extract_username(anchor: &ElementRef<'_>) -> String {
    let href = anchor.value().attr("href").unwrap_or_default();
    let name = href.strip_prefix(USER_PREFIX).unwrap_or(href);
    let name = name.split_once('#').map_or(name, |(name, _)| name);
    let name = name.replace('_', " ");

    match urlencoding::decode(&name) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::debug!("Keeping undecodable username {name:?}: {e}");
            name
        }
    }
}

fn nearest_ancestor<'a>(anchor: &ElementRef<'a>, names: &[&str]) -> Option<ElementRef<'a>> {
    anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| names.contains(&el.value().name()))
}

fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

fn is_promoter(anchor: &ElementRef<'_>) -> bool {
    nearest_ancestor(anchor, &["p"]).is_some_and(|p| PROMOTED_BY.is_match(&text_of(&p)))
}

fn is_approver(anchor: &ElementRef<'_>) -> bool {
    nearest_ancestor(anchor, &["p", "li"])
        .is_some_and(|block| block.select(&APPROVAL_ICON_SELECTOR).next().is_some())
}

fn is_nominator(anchor: &ElementRef<'_>) -> bool {
    nearest_ancestor(anchor, &["div"]).is_some_and(|div| NOMINATIONS.is_match(&text_of(&div)))
}

/// Role of the user an anchor links to, judged by its surroundings.
pub fn classify(anchor: &ElementRef<'_>) -> Option<UserRole> {
    if is_promoter(anchor) {
        return Some(UserRole::Promoter);
    }
    if is_approver(anchor) {
        return Some(UserRole::Approver);
    }
    // Matches almost any div on a nomination page, so it has to go last.
    if is_nominator(anchor) {
        return Some(UserRole::Nominator);
    }
    None
}

/// Classify every anchor; the first role found for a user sticks.
pub fn classify_all<'a, I>(anchors: I) -> UserRoles
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    let mut roles = UserRoles::new();
    for anchor in anchors {
        let Some(role) = classify(&anchor) else {
            continue;
        };
        let username = extract_username(&anchor);
        match roles.entry(username) {
            Entry::Vacant(entry) => {
                entry.insert(role);
            }
            Entry::Occupied(entry) => {
                if *entry.get() != role {
                    log::warn!(
                        "Ignoring role {} for {}, already classified as {}",
                        role,
                        entry.key(),
                        entry.get()
                    );
                }
            }
        }
    }
    roles
}

/// Parse a rendered page and classify all its user links.
pub fn classify_document(html: &str) -> UserRoles {
    let document = Html::parse_document(html);
    classify_all(find_user_anchors(&document))
}
