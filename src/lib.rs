//! structdoc - Repository Structure Documentation Generator
//!
//! Produces a `REPOSITORY_STRUCTURE.md` Markdown document for a source
//! directory: an ASCII tree of its contents followed by the documentation
//! comment extracted from each source file.
//!
//! ## Core Features
//!
//! - **Tree Rendering**: box-drawing tree with directories listed first
//! - **Doc Extraction**: Python docstrings, JSDoc blocks, Kotlin/Java class docs
//!   via tree-sitter
//! - **Snapshots**: directory trees read through the `ignore` walker
//! - **Layered Config**: defaults, global and project TOML, `STRUCTDOC_*` env
//!
//! ## Quick Start
//!
//! ```ignore
//! use structdoc::{ScanOptions, StructureDocumenter};
//!
//! let documenter = StructureDocumenter::new()?;
//! let markdown = documenter.generate_path("backend".as_ref(), ScanOptions::default())?;
//! std::fs::write("backend/REPOSITORY_STRUCTURE.md", markdown)?;
//! ```
//!
//! ## Modules
//!
//! - [`snapshot`]: directory snapshots and the filesystem builder
//! - [`extract`]: language classification and doc comment extraction
//! - [`document`]: tree rendering and document assembly
//! - [`config`]: layered configuration
//! - [`cli`]: command handlers for the `structdoc` binary

pub mod cli;
pub mod config;
pub mod constants;
pub mod document;
pub mod extract;
pub mod snapshot;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{DocError, Result, ResultExt};

// Snapshots
pub use snapshot::{DirectoryEntry, EntryKind, FileContent, ScanOptions, SnapshotBuilder};

// Extraction
pub use extract::{DocExtractor, KotlinJavaStrategy, LanguageClass};

// Documents
pub use document::{Clock, FixedClock, StructureDocumenter, SystemClock, TreeRenderer};
