//! Structure Document Assembly
//!
//! Builds the complete Markdown document for one root directory:
//!
//! ~~~text
//! # NAME Structure
//! Last updated: 2024-03-01T12:00:00
//!
//! ## Directory Structure
//! ```
//! <tree block>
//! ```
//!
//! ## File Documentation
//! ### sub/dir
//! #### file.py
//! <extracted doc>
//! ~~~
//!
//! The document is built fully in memory; persisting it is the caller's job.

use std::fmt::Write as _;
use std::path::Path;

use super::clock::{Clock, SystemClock, format_timestamp};
use super::tree::TreeRenderer;
use crate::extract::DocExtractor;
use crate::snapshot::{DirectoryEntry, ScanOptions, SnapshotBuilder};
use crate::types::{DocError, Result};

/// Generates repository structure documents
pub struct StructureDocumenter {
    extractor: DocExtractor,
    clock: Box<dyn Clock>,
}

impl StructureDocumenter {
    /// Documenter with the default extractor and the system clock
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(DocExtractor::new()?, Box::new(SystemClock)))
    }

    pub fn with_parts(extractor: DocExtractor, clock: Box<dyn Clock>) -> Self {
        Self { extractor, clock }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Render the document for a directory snapshot.
    ///
    /// Fails with `NotFound` before producing output when `directory` is not
    /// a directory.
    pub fn generate(&self, directory: &DirectoryEntry) -> Result<String> {
        if !directory.is_directory() {
            return Err(DocError::not_found(&directory.name));
        }

        let mut content = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(content, "# {} Structure", directory.name.to_uppercase());
        let _ = writeln!(
            content,
            "Last updated: {}\n",
            format_timestamp(self.clock.now())
        );

        content.push_str("## Directory Structure\n```\n");
        content.push_str(&TreeRenderer::render(directory));
        content.push_str("\n```\n\n");

        content.push_str("## File Documentation\n");
        let documented = self.walk_docs(directory, "", &mut content);

        tracing::debug!(
            "Generated structure document for {} ({} documented files)",
            directory.name,
            documented
        );

        Ok(content)
    }

    /// Snapshot `root` from disk and render its document.
    pub fn generate_path(&self, root: &Path, options: ScanOptions) -> Result<String> {
        let snapshot = SnapshotBuilder::new(root).with_options(options).build()?;
        self.generate(&snapshot)
    }

    /// Append sections for `dir`; returns the number of documented files.
    fn walk_docs(&self, dir: &DirectoryEntry, relative_path: &str, content: &mut String) -> usize {
        let mut documented = 0;

        for child in dir.sorted_children() {
            if child.is_directory() {
                let new_path = if relative_path.is_empty() {
                    child.name.clone()
                } else {
                    format!("{}/{}", relative_path, child.name)
                };
                let _ = write!(content, "\n### {}\n", new_path);
                documented += self.walk_docs(child, &new_path, content);
            } else if let Some(doc) = self.extractor.extract_entry(child)
                && !doc.is_empty()
            {
                let _ = write!(content, "\n#### {}\n{}\n", child.name, doc);
                documented += 1;
            }
        }

        documented
    }
}
