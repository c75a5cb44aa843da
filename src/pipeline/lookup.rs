// src/pipeline/lookup.rs

//! Single fetch-and-parse lookups.

use crate::error::{AppError, Result};
use crate::models::{Config, HookSet, HookSetKey, UpdateTimes, UserRoles};
use crate::services::{
    HookSetExtractor, UpdateTimesParser, WikiSource, resolve_from_backlinks, roles,
};

/// Fetch and parse the update-time table.
pub async fn fetch_update_times(source: &dyn WikiSource, config: &Config) -> Result<UpdateTimes> {
    let html = source.page_html(&config.parser.update_times_page).await?;
    let times = UpdateTimesParser::from_config(&config.parser).parse(&html);
    log::info!("Found update times for {} hook sets", times.len());
    Ok(times)
}

/// Fetch and parse a queue or prep page.
pub async fn fetch_hook_set(
    source: &dyn WikiSource,
    config: &Config,
    title: &str,
) -> Result<HookSet> {
    let extractor = HookSetExtractor::from_config(&config.parser)?;
    let wikitext = source.wikitext(title).await?;
    let hook_set = extractor.build(title, wikitext)?;
    log::info!(
        "{} has {} hooks and {} credited articles",
        title,
        hook_set.hooks.len(),
        hook_set.nomination_map.len()
    );
    Ok(hook_set)
}

/// The queue or prep a nomination has been promoted to, if any.
pub async fn find_hook_set(
    source: &dyn WikiSource,
    nomination_title: &str,
) -> Result<Option<(String, HookSetKey)>> {
    let backlinks = source.backlinks(nomination_title).await?;
    let found = resolve_from_backlinks(&backlinks);
    if found.is_none() {
        log::info!("{nomination_title} is not in any queue or prep");
    }
    Ok(found)
}

/// Fetch a nomination page and classify the users linked from it.
pub async fn fetch_roles(source: &dyn WikiSource, nomination_title: &str) -> Result<UserRoles> {
    let html = source.page_html(nomination_title).await?;
    Ok(roles::classify_document(&html))
}

/// Key for a hook set title, or a validation error naming the title.
pub fn require_key(title: &str) -> Result<HookSetKey> {
    crate::services::hook_set_key(title).ok_or_else(|| {
        AppError::validation(format!("{title:?} is not a queue or preparation area page"))
    })
}
