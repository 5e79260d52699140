// src/core/matcher.rs
use std::fs;
use std::path::Path;

use crate::core::pattern::{compile, has_wildcards, normalize_separators};
use crate::core::walk::walk;
use crate::models::{Entry, EntryKind};
use crate::utils::{join_slash_path, relative_slash_path};

/// Returns every entry under `root` whose root-relative path matches
/// `pattern`, in the walker's deterministic pre-order.
///
/// A wildcard-free pattern short-circuits to a direct existence probe
/// of `root/pattern`. That is an optimization only: the result set is
/// the same as scanning the tree with the equivalent literal pattern —
/// in particular, a pattern that is empty or carries `.`/`..` segments
/// yields nothing, since no walked path ever looks like that.
#[must_use]
pub fn find_matches(root: &Path, pattern: &str) -> Vec<Entry> {
    if !has_wildcards(pattern) {
        return probe_literal(root, pattern);
    }

    let compiled = compile(pattern);
    walk(root, pattern)
        .filter(|entry| {
            relative_slash_path(root, &entry.path).is_some_and(|rel| compiled.matches(&rel))
        })
        .collect()
}

fn probe_literal(root: &Path, pattern: &str) -> Vec<Entry> {
    let normalized = normalize_separators(pattern);
    let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

    // No walked path is empty or carries a dot segment, so such
    // patterns cannot match anything; resolving them would also let the
    // candidate escape the root.
    if segments.is_empty() || segments.iter().any(|s| *s == "." || *s == "..") {
        return Vec::new();
    }

    let candidate = join_slash_path(root, &normalized);
    match fs::metadata(&candidate) {
        Ok(meta) => {
            let kind = if meta.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            vec![Entry::new(candidate, kind)]
        }
        Err(_) => Vec::new(),
    }
}
