// src/lib.rs

//! DYK Tools Library
//!
//! Parsers for the Did You Know queue, prep and nomination pages, plus
//! the pipelines that turn them into ping and review notices.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
