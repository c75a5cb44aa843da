// src/pipeline/ping.rs

//! Ping notice pipeline for a nomination.

use crate::error::Result;
use crate::models::{Config, UpdateTimes};
use crate::services::{UpdateTimesParser, WikiSource, notice, resolve_from_backlinks, roles};

/// Draft a ping notice for everyone involved in a nomination.
pub async fn run_ping(
    source: &dyn WikiSource,
    config: &Config,
    nomination_title: &str,
) -> Result<String> {
    log::info!("Drafting ping notice for {nomination_title}");

    let (times_html, page_html, backlinks) = futures::try_join!(
        source.page_html(&config.parser.update_times_page),
        source.page_html(nomination_title),
        source.backlinks(nomination_title),
    )?;

    let hook_set = resolve_from_backlinks(&backlinks);
    let times = match &hook_set {
        Some(_) => UpdateTimesParser::from_config(&config.parser).parse(&times_html),
        None => {
            log::warn!("{nomination_title} is not in any queue or prep; omitting the header");
            UpdateTimes::new()
        }
    };
    let user_roles = roles::classify_document(&page_html);
    log::info!("Classified {} users", user_roles.len());

    Ok(notice::ping_draft(
        nomination_title,
        hook_set.as_ref().map(|(title, key)| (title.as_str(), key)),
        &times,
        &user_roles,
    ))
}
