// src/core/walk.rs
use std::path::Path;
use walkdir::WalkDir;

use crate::core::exclude::should_descend;
use crate::models::{Entry, EntryKind};

/// Lazily enumerates filesystem entries under `root`, depth-first and
/// pre-order (a directory is yielded before its children), sorted by
/// file name for deterministic output.
///
/// Directories failing the exclusion check for `active_pattern` are
/// neither yielded nor descended into. Unreadable subtrees are dropped
/// and the walk continues over their siblings; the root entry itself is
/// not yielded.
pub fn walk(root: &Path, active_pattern: &str) -> impl Iterator<Item = Entry> + use<> {
    let pattern = active_pattern.to_owned();
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| {
            !e.file_type().is_dir()
                || e.file_name()
                    .to_str()
                    .is_none_or(|name| should_descend(name, &pattern))
        })
        .filter_map(Result::ok)
        .map(|e| {
            let kind = if e.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            Entry::new(e.into_path(), kind)
        })
}
