//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, LsArgs};
pub use output::{format_config, format_listing, format_listing_json};
