//! Generate Command
//!
//! Write a structure document into each root directory.
//!
//! Usage:
//!   structdoc generate [ROOT]... [--output-file NAME] [--dry-run]

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::util::CommandContext;
use crate::snapshot::ScanOptions;
use crate::types::{DocError, Result};

/// Generate command options
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Roots given on the command line; empty means `generate.roots`
    pub roots: Vec<PathBuf>,
    /// Overrides `generate.output_file`
    pub output_file: Option<String>,
    /// Report targets without writing
    pub dry_run: bool,
}

/// A document produced for one root
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of a generate run
#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub documents: Vec<GeneratedDocument>,
    pub skipped: Vec<PathBuf>,
}

pub fn run(ctx: &mut CommandContext, options: GenerateOptions) -> Result<GenerateSummary> {
    if let Some(output_file) = options.output_file {
        ctx.config.generate.output_file = output_file;
        ctx.config.validate()?;
    }

    let roots = if options.roots.is_empty() {
        ctx.config.generate.roots.iter().map(PathBuf::from).collect()
    } else {
        options.roots
    };

    let documenter = ctx.documenter()?;
    let scan = ScanOptions::from(&ctx.config.scan);
    let output_file = ctx.config.generate.output_file.as_str();

    let mut summary = GenerateSummary::default();

    for root in &roots {
        if !root.is_dir() {
            ctx.output
                .warning(&format!("Skipping {}: directory not found", root.display()));
            summary.skipped.push(root.clone());
            continue;
        }

        debug!("Documenting {}", root.display());
        let content = documenter.generate_path(root, scan.clone())?;
        let target = root.join(output_file);

        if options.dry_run {
            ctx.output.info(&format!(
                "Would write {} ({} bytes)",
                target.display(),
                content.len()
            ));
        } else {
            write_document(&target, &content)?;
            ctx.output.success(&format!(
                "Wrote {} ({} bytes)",
                target.display(),
                content.len()
            ));
        }

        summary.documents.push(GeneratedDocument {
            path: target,
            bytes: content.len(),
        });
    }

    if summary.documents.is_empty() {
        let missing = roots
            .iter()
            .map(|r| r.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(DocError::not_found(missing));
    }

    info!(
        "Generated {} document(s), skipped {} root(s)",
        summary.documents.len(),
        summary.skipped.len()
    );

    Ok(summary)
}

fn write_document(target: &Path, content: &str) -> Result<()> {
    fs::write(target, content)?;
    debug!("Wrote {}", target.display());
    Ok(())
}
