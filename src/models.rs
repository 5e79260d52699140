// src/models.rs
use std::path::PathBuf;

/// Kind of filesystem entry discovered by the tree walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A filesystem entry yielded by one enumeration pass. Not retained
/// beyond the copy operation that consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    #[must_use]
    pub const fn new(path: PathBuf, kind: EntryKind) -> Self {
        Self { path, kind }
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

/// A single pending copy, produced by the matcher and consumed
/// immediately by the sync executor.
#[derive(Debug, Clone)]
pub struct CopyTask {
    pub source: PathBuf,
    pub target: PathBuf,
    pub kind: EntryKind,
}

/// Outcome of one synchronization run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub files_copied: u64,
    pub dirs_copied: u64,
    pub failures: u64,
}

impl SyncReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_copied: 0,
            dirs_copied: 0,
            failures: 0,
        }
    }

    /// True when every matched entry was copied without error.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures == 0
    }

    #[must_use]
    pub const fn total_copied(&self) -> u64 {
        self.files_copied.saturating_add(self.dirs_copied)
    }
}
