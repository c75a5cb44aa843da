// src/services/identity.rs

//! Hook set identity: from page titles to `Queue N` / `Prep N`.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{HookSetKey, HookSetKind};

static QUEUE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Template:Did you know/Queue/(?P<number>[1-9][0-9]*)$")
        .expect("queue title pattern is valid")
});
static PREP_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Template:Did you know/Preparation area (?P<number>[1-9][0-9]*)$")
        .expect("prep title pattern is valid")
});

/// Short label for a queue or prep page title, if it is one.
pub fn hook_set_key(page_title: &str) -> Option<HookSetKey> {
    [
        (HookSetKind::Queue, &*QUEUE_TITLE),
        (HookSetKind::Prep, &*PREP_TITLE),
    ]
    .into_iter()
    .find_map(|(kind, pattern)| {
        let caps = pattern.captures(page_title)?;
        let number = caps["number"].parse().ok()?;
        Some(HookSetKey::new(kind, number))
    })
}

/// First backlink that is a queue or prep page, with its key.
///
/// Candidates are tried in the order given; a nomination linked from two
/// hook sets resolves to whichever comes first.
pub fn resolve_from_backlinks<I, S>(backlink_titles: I) -> Option<(String, HookSetKey)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    backlink_titles.into_iter().find_map(|title| {
        let title = title.as_ref();
        hook_set_key(title).map(|key| (title.to_string(), key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_key() {
        let key = hook_set_key("Template:Did you know/Queue/6").unwrap();
        assert_eq!(key, HookSetKey::queue(6));
        assert_eq!(key.to_string(), "Queue 6");
    }

    #[test]
    fn test_prep_key() {
        let key = hook_set_key("Template:Did you know/Preparation area 1").unwrap();
        assert_eq!(key.to_string(), "Prep 1");
    }

    #[test]
    fn test_multi_digit() {
        assert_eq!(
            hook_set_key("Template:Did you know/Queue/12"),
            Some(HookSetKey::queue(12))
        );
    }

    #[test]
    fn test_non_matching_titles() {
        for title in [
            "Template:Something else",
            "Template:Did you know/Queue/LocalUpdateTimes",
            "Template:Did you know/Queue/6/sub",
            "Template:Did you know/Queue/0",
            "Template:Did you know nominations/Aliko Dangote",
            "Template:Did you know/Preparation area",
            "Template:Did you know/Queue/99999999999",
        ] {
            assert_eq!(hook_set_key(title), None, "{title}");
        }
    }

    #[test]
    fn test_resolve_from_backlinks() {
        let titles = [
            "Template:Did you know/Queue/6",
            "Template:Did you know nominations/Cheng Lianzhen",
        ];
        assert_eq!(
            resolve_from_backlinks(titles),
            Some(("Template:Did you know/Queue/6".to_string(), HookSetKey::queue(6)))
        );
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let titles = vec![
            "Template:Did you know nominations/Other".to_string(),
            "Template:Did you know/Preparation area 3".to_string(),
            "Template:Did you know/Queue/2".to_string(),
        ];
        let (title, key) = resolve_from_backlinks(&titles).unwrap();
        assert_eq!(title, "Template:Did you know/Preparation area 3");
        assert_eq!(key.to_string(), "Prep 3");
    }

    #[test]
    fn test_resolve_none() {
        assert_eq!(
            resolve_from_backlinks(["Template:Did you know nominations/Cheng Lianzhen"]),
            None
        );
        assert_eq!(resolve_from_backlinks(Vec::<String>::new()), None);
    }
}
