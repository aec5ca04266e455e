//! Print Command
//!
//! Render the structure document for one directory to stdout.

use std::path::Path;

use crate::cli::util::CommandContext;
use crate::snapshot::ScanOptions;
use crate::types::Result;

/// Render the document for `dir` without writing it
pub fn render(ctx: &CommandContext, dir: &Path) -> Result<String> {
    ctx.documenter()?
        .generate_path(dir, ScanOptions::from(&ctx.config.scan))
}

pub fn run(ctx: &CommandContext, dir: &Path) -> Result<()> {
    print!("{}", render(ctx, dir)?);
    Ok(())
}
