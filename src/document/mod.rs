//! Document Generation
//!
//! - `TreeRenderer`: ASCII box-drawing tree block
//! - `StructureDocumenter`: header, tree block and per-file documentation
//! - `Clock`: injected time source for the "Last updated" line

pub mod clock;
pub mod documenter;
pub mod tree;

pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use documenter::StructureDocumenter;
pub use tree::TreeRenderer;
