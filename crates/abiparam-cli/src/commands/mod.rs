//! CLI subcommand handlers

pub mod codec;
pub mod types;
