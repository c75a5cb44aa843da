//! Service layer for the DYK tools.
//!
//! This module contains the parsing and classification logic:
//! - Update-time table parsing (`UpdateTimesParser`)
//! - Hook and credit extraction (`HookSetExtractor`)
//! - Hook set identity (`hook_set_key`, `resolve_from_backlinks`)
//! - User role classification (`roles`)
//! - Draft notices (`notice`)
//! - Wiki access (`WikiSource`, `WikiClient`)

mod hook_sets;
mod identity;
pub mod notice;
pub mod roles;
mod update_times;
mod wiki;

pub use hook_sets::HookSetExtractor;
pub use identity::{hook_set_key, resolve_from_backlinks};
pub use update_times::{UpdateTimesParser, parse_update_times};
pub use wiki::{WikiClient, WikiSource};
