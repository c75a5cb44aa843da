// src/pipeline/review.rs

//! Review notice pipeline for a queue or prep.

use crate::error::Result;
use crate::models::Config;
use crate::services::{WikiSource, notice};

use super::lookup::{fetch_hook_set, fetch_update_times, require_key};

/// Draft a review notice listing every hook in a hook set.
pub async fn run_review(
    source: &dyn WikiSource,
    config: &Config,
    hook_set_title: &str,
) -> Result<String> {
    let key = require_key(hook_set_title)?;
    log::info!("Drafting review notice for {key}");

    let (times, hook_set) = futures::try_join!(
        fetch_update_times(source, config),
        fetch_hook_set(source, config, hook_set_title),
    )?;

    Ok(notice::review_draft(&hook_set, &key, &times))
}
