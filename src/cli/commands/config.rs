//! Config Command
//!
//! Manage structdoc configuration.
//!
//! Usage:
//!   structdoc config show [-f json]
//!   structdoc config path
//!   structdoc config init [--global] [--force]

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::config::ConfigLoader;
use crate::types::{DocError, Result};

/// Show the merged effective configuration
pub fn show(ctx: &CommandContext, format: &str) -> Result<()> {
    let as_json = match format {
        "json" => true,
        "text" | "toml" => false,
        other => {
            return Err(DocError::Config(format!(
                "Unknown format '{}'. Valid values: text, json",
                other
            )));
        }
    };

    println!("{}", ConfigLoader::render(&ctx.config, as_json)?);
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global or project configuration
pub fn init(output: &Output, global: bool, force: bool) -> Result<()> {
    let (scope, config_path) = if global {
        ("global", ConfigLoader::init_global(force)?)
    } else {
        ("project", ConfigLoader::init_project(force)?)
    };

    output.success(&format!("Initialized {} configuration", scope));
    output.info(&format!("Config: {}", config_path.display()));
    Ok(())
}
