//! Directory Snapshots
//!
//! Read-only value snapshots of a directory tree:
//! - `DirectoryEntry` nodes with lazily readable file content
//! - `SnapshotBuilder` populating them from the local filesystem

pub mod entry;
pub mod scanner;

pub use entry::{DirectoryEntry, EntryKind, FileContent};
pub use scanner::{ScanOptions, SnapshotBuilder};
