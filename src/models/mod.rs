// src/models/mod.rs

//! Domain models for the DYK tools.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

pub mod api;
mod config;
mod hook;
mod hook_set;
mod link;
mod roles;
mod update_times;

// Re-export all public types
pub use config::{ApiConfig, Config, LoggingConfig, ParserConfig};
pub use hook::Hook;
pub use hook_set::{HookSet, HookSetKey, HookSetKind};
pub use link::Link;
pub use roles::{UserRole, UserRoles};
pub use update_times::UpdateTimes;
