//! CLI command handlers

pub mod commands;

pub use commands::{format_preview_table, preview, process};
