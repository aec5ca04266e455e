use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use super::entry::{DirectoryEntry, EntryKind};
use crate::constants::scan::{DEFAULT_EXCLUDE, DEFAULT_MAX_FILE_SIZE};
use crate::types::{DocError, Result, log_filter_error};

/// Options controlling what the snapshot contains
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    /// Glob patterns matched against `/`-separated paths relative to the root
    pub exclude: Vec<String>,
    pub max_file_size: u64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            respect_gitignore: false,
            exclude: DEFAULT_EXCLUDE.iter().map(|p| p.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Builds a [`DirectoryEntry`] snapshot from the local filesystem
pub struct SnapshotBuilder {
    root: PathBuf,
    options: ScanOptions,
}

impl SnapshotBuilder {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude = patterns;
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.options.max_file_size = size;
        self
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.options.include_hidden = include;
        self
    }

    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.options.respect_gitignore = respect;
        self
    }

    /// Walk the root and return its snapshot.
    ///
    /// Fails with `NotFound` when the root is missing or not a directory.
    pub fn build(&self) -> Result<DirectoryEntry> {
        if !self.root.is_dir() {
            return Err(DocError::not_found(&self.root));
        }

        let exclude = self
            .options
            .exclude
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut snapshot = DirectoryEntry::directory(root_name(&self.root), Vec::new());

        let filter_root = self.root.clone();
        let respect = self.options.respect_gitignore;
        let walker = WalkBuilder::new(&self.root)
            .hidden(!self.options.include_hidden)
            .git_ignore(respect)
            .git_global(respect)
            .git_exclude(respect)
            .ignore(respect)
            .parents(respect)
            .require_git(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                match relative_components(&filter_root, entry.path()) {
                    Some(components) if !components.is_empty() => {
                        let rel = components.join("/");
                        !exclude.iter().any(|p| p.matches(&rel))
                    }
                    _ => true,
                }
            })
            .build();

        for entry in walker.filter_map(|e| log_filter_error(e, "walking snapshot")) {
            if entry.depth() == 0 {
                continue;
            }

            let Some(components) = relative_components(&self.root, entry.path()) else {
                continue;
            };

            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let leaf = if is_dir {
                DirectoryEntry::directory(components[components.len() - 1].clone(), Vec::new())
            } else {
                DirectoryEntry::file_on_disk(
                    components[components.len() - 1].clone(),
                    entry.path().to_path_buf(),
                    self.options.max_file_size,
                )
            };

            insert(&mut snapshot, &components[..components.len() - 1], leaf);
        }

        tracing::debug!(
            "Snapshot of {} holds {} entries",
            self.root.display(),
            snapshot.descendant_count()
        );

        Ok(snapshot)
    }
}

/// Name shown in the heading: last component of the canonical root.
fn root_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.to_string_lossy().into_owned())
}

fn relative_components(root: &Path, path: &Path) -> Option<Vec<String>> {
    let rel = path.strip_prefix(root).ok()?;
    Some(
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect(),
    )
}

/// Place `leaf` under the directory addressed by `parents`.
///
/// The walker yields a directory before its contents, so intermediate
/// directories normally exist already; missing ones are created.
fn insert(node: &mut DirectoryEntry, parents: &[String], leaf: DirectoryEntry) {
    let Some((first, rest)) = parents.split_first() else {
        node.children.push(leaf);
        return;
    };

    let index = match node
        .children
        .iter()
        .position(|c| c.kind == EntryKind::Directory && &c.name == first)
    {
        Some(i) => i,
        None => {
            node.children
                .push(DirectoryEntry::directory(first.clone(), Vec::new()));
            node.children.len() - 1
        }
    };

    insert(&mut node.children[index], rest, leaf);
}
