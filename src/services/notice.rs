// src/services/notice.rs

//! Draft notice text for pinging contributors and reviewing a hook set.

use crate::models::{HookSet, HookSetKey, UpdateTimes, UserRoles};

pub const NOMINATION_PREFIX: &str = "Template:Did you know nominations/";
const UNKNOWN_TIME: &str = "unknown time";

/// `==[[Template:Did you know/Queue/6|Queue 6]] (16&nbsp;February&nbsp;00:00)==`
pub fn hook_set_header(title: &str, key: &HookSetKey, times: &UpdateTimes) -> String {
    let time = times.for_key(key).unwrap_or_else(|| {
        log::warn!("No update time listed for {key}");
        UNKNOWN_TIME
    });
    format!("==[[{title}|{key}]] ({time})==")
}

/// Article name of a nomination page (the title without its template prefix).
pub fn nomination_name(nomination_title: &str) -> &str {
    nomination_title
        .strip_prefix(NOMINATION_PREFIX)
        .or_else(|| nomination_title.strip_prefix("Template:Did_you_know_nominations/"))
        .unwrap_or(nomination_title)
}

/// Ping notice for a nomination: hook set header (when known), nomination
/// heading, then one `{{ping|...}}` per classified user.
pub fn ping_draft(
    nomination_title: &str,
    hook_set: Option<(&str, &HookSetKey)>,
    times: &UpdateTimes,
    roles: &UserRoles,
) -> String {
    let mut out = String::new();
    if let Some((title, key)) = hook_set {
        out.push_str(&hook_set_header(title, key, times));
        out.push_str("\n\n");
    }
    out.push_str(&format!(
        "===[[{}|{}]]===\n",
        nomination_title,
        nomination_name(nomination_title)
    ));

    let mut users: Vec<_> = roles.iter().collect();
    users.sort_by(|(a_name, a_role), (b_name, b_role)| {
        a_role.cmp(b_role).then_with(|| a_name.cmp(b_name))
    });
    for (username, _) in users {
        out.push_str(&format!("{{{{ping|{username}}}}}\n"));
    }
    out
}

/// Review notice for a hook set: header, then each hook under a heading
/// naming its nomination.
pub fn review_draft(hook_set: &HookSet, key: &HookSetKey, times: &UpdateTimes) -> String {
    let mut out = String::new();
    out.push_str(&hook_set_header(&hook_set.title, key, times));
    out.push('\n');

    for hook in &hook_set.hooks {
        out.push('\n');
        match hook.first_target() {
            Some(target) => {
                let nomination = hook_set.nomination_for(target).unwrap_or_else(|| {
                    log::warn!("No credit line names a nomination for {target:?}");
                    target
                });
                out.push_str(&format!(
                    "==={nomination} ([[{NOMINATION_PREFIX}{nomination}|nom]])===\n"
                ));
            }
            None => {
                log::warn!("Hook has no bold link: {}", hook.text);
                out.push_str("===(no bold link)===\n");
            }
        }
        out.push_str(&hook.text);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{Hook, UserRole};

    fn times() -> UpdateTimes {
        [("Queue 1", "Foo"), ("Queue 6", "16&nbsp;February&nbsp;00:00")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_hook_set_header() {
        assert_eq!(
            hook_set_header("Template:Did you know/Queue/1", &HookSetKey::queue(1), &times()),
            "==[[Template:Did you know/Queue/1|Queue 1]] (Foo)=="
        );
    }

    #[test]
    fn test_hook_set_header_missing_time() {
        assert_eq!(
            hook_set_header(
                "Template:Did you know/Preparation area 2",
                &HookSetKey::prep(2),
                &times()
            ),
            "==[[Template:Did you know/Preparation area 2|Prep 2]] (unknown time)=="
        );
    }

    #[test]
    fn test_nomination_name() {
        assert_eq!(
            nomination_name("Template:Did you know nominations/Roland L. Bragg"),
            "Roland L. Bragg"
        );
        assert_eq!(
            nomination_name("Template:Did_you_know_nominations/Roland_L._Bragg"),
            "Roland_L._Bragg"
        );
        assert_eq!(nomination_name("Something"), "Something");
    }

    #[test]
    fn test_ping_draft() {
        let roles: UserRoles = HashMap::from([
            ("Gatoclass".to_string(), UserRole::Approver),
            ("SL93".to_string(), UserRole::Promoter),
            ("Jackdude101".to_string(), UserRole::Nominator),
        ]);
        let key = HookSetKey::queue(1);
        let draft = ping_draft(
            "Template:Did you know nominations/Main Street Vehicles",
            Some(("Template:Did you know/Queue/1", &key)),
            &times(),
            &roles,
        );
        assert_eq!(
            draft,
            "==[[Template:Did you know/Queue/1|Queue 1]] (Foo)==\n\
             \n\
             ===[[Template:Did you know nominations/Main Street Vehicles|Main Street Vehicles]]===\n\
             {{ping|SL93}}\n\
             {{ping|Jackdude101}}\n\
             {{ping|Gatoclass}}\n"
        );
    }

    #[test]
    fn test_ping_draft_without_hook_set() {
        let draft = ping_draft(
            "Template:Did you know nominations/Foo",
            None,
            &times(),
            &UserRoles::new(),
        );
        assert_eq!(draft, "===[[Template:Did you know nominations/Foo|Foo]]===\n");
    }

    #[test]
    fn test_review_draft() {
        let hook_set = HookSet {
            title: "Template:Did you know/Queue/6".to_string(),
            wikitext: String::new(),
            hooks: vec![
                Hook::parse("* ... that '''[[Foo]]''' blah?"),
                Hook::parse("* ... that '''[[Bar|bar]]''' too?"),
                Hook::parse("* ... that nothing is bold?"),
            ],
            nomination_map: HashMap::from([("Foo".to_string(), "Foo and Baz".to_string())]),
        };
        let draft = review_draft(&hook_set, &HookSetKey::queue(6), &times());
        assert_eq!(
            draft,
            "==[[Template:Did you know/Queue/6|Queue 6]] (16&nbsp;February&nbsp;00:00)==\n\
             \n\
             ===Foo and Baz ([[Template:Did you know nominations/Foo and Baz|nom]])===\n\
             * ... that '''[[Foo]]''' blah?\n\
             \n\
             ===Bar ([[Template:Did you know nominations/Bar|nom]])===\n\
             * ... that '''[[Bar|bar]]''' too?\n\
             \n\
             ===(no bold link)===\n\
             * ... that nothing is bold?\n"
        );
    }
}
