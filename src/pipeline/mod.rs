//! Pipeline entry points for DYK tool operations.
//!
//! - `run_ping`: Draft a ping notice for a nomination's contributors
//! - `run_review`: Draft a review notice for a queue or prep
//! - `fetch_*` / `find_hook_set`: Single lookups backing the CLI commands

pub mod lookup;
pub mod ping;
pub mod review;

#[cfg(test)]
pub(crate) mod fake;

pub use lookup::{fetch_hook_set, fetch_roles, fetch_update_times, find_hook_set};
pub use ping::run_ping;
pub use review::run_review;
