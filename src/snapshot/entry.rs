//! Directory Snapshot Types
//!
//! A plain value model of a directory tree taken once before a generation
//! pass. File content stays on disk until something asks for it.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of a snapshot node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Lazily obtainable file content
#[derive(Debug, Clone, Default)]
pub enum FileContent {
    /// Bytes held in memory
    Inline(Vec<u8>),
    /// Read from disk on demand; unreadable when larger than `max_size`
    OnDisk { path: PathBuf, max_size: u64 },
    /// Directories, or files the host could not expose
    #[default]
    Unavailable,
}

impl FileContent {
    /// Read the bytes, or None when the content cannot be obtained.
    pub fn read(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            FileContent::Inline(bytes) => Some(Cow::Borrowed(bytes.as_slice())),
            FileContent::OnDisk { path, max_size } => read_bounded(path, *max_size),
            FileContent::Unavailable => None,
        }
    }
}

fn read_bounded(path: &Path, max_size: u64) -> Option<Cow<'static, [u8]>> {
    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::debug!("Cannot stat {}: {}", path.display(), e);
            return None;
        }
    };

    if size > max_size {
        tracing::debug!(
            "Skipping {} ({} bytes exceeds limit of {})",
            path.display(),
            size,
            max_size
        );
        return None;
    }

    match fs::read(path) {
        Ok(bytes) => Some(Cow::Owned(bytes)),
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}

/// One filesystem item observed at snapshot time
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Populated only for directories, in insertion order
    pub children: Vec<DirectoryEntry>,
    /// Populated only for files
    pub content: FileContent,
}

impl DirectoryEntry {
    pub fn directory(name: impl Into<String>, children: Vec<DirectoryEntry>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            children,
            content: FileContent::Unavailable,
        }
    }

    /// File with in-memory content
    pub fn file(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            children: Vec::new(),
            content: FileContent::Inline(content.into()),
        }
    }

    /// File whose content is read from `path` on demand
    pub fn file_on_disk(name: impl Into<String>, path: PathBuf, max_size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            children: Vec::new(),
            content: FileContent::OnDisk { path, max_size },
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Text after the last dot of the name, if any
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.name).extension().and_then(|e| e.to_str())
    }

    /// Children with directories first, then by name.
    ///
    /// Computed on every call; the snapshot keeps its insertion order.
    pub fn sorted_children(&self) -> Vec<&DirectoryEntry> {
        let mut children: Vec<&DirectoryEntry> = self.children.iter().collect();
        children.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| a.name.cmp(&b.name))
        });
        children
    }

    /// Content decoded as UTF-8, replacing invalid sequences.
    pub fn read_text(&self) -> Option<String> {
        self.content
            .read()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&DirectoryEntry> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Number of entries below this one (files and directories)
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}
