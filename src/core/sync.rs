// src/core/sync.rs
use anyhow::{Context as _, Error, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::matcher::find_matches;
use crate::models::{CopyTask, EntryKind, SyncReport};

/// Per-invocation observer for synchronization diagnostics. Callers
/// attach one per run instead of the engine printing ambiently.
pub trait SyncObserver {
    fn pattern_started(&mut self, _pattern: &str) {}
    fn entry_copied(&mut self, _task: &CopyTask) {}
    fn entry_failed(&mut self, _path: &Path, _error: &Error) {}
}

/// Observer that prints per-entry actions to the console, failures to
/// stderr.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl SyncObserver for ConsoleObserver {
    fn pattern_started(&mut self, pattern: &str) {
        println!("Syncing pattern '{pattern}'");
    }

    fn entry_copied(&mut self, task: &CopyTask) {
        println!("  copied {}", task.source.display());
    }

    fn entry_failed(&mut self, path: &Path, error: &Error) {
        eprintln!("  failed {}: {error:#}", path.display());
    }
}

/// Copies every entry under `source_root` matching one of `patterns`
/// to the corresponding path under `target_root`, preserving relative
/// structure. Patterns are processed strictly in the given order, and
/// matches within a pattern in walk order.
///
/// Best-effort by contract: a failing entry or pattern is reported to
/// the observer and counted, then processing continues; this function
/// never raises, so a failed sync can never abort the worktree-creation
/// workflow that invokes it. The worst outcome is a partially populated
/// target plus diagnostics.
pub fn synchronize(
    source_root: &Path,
    target_root: &Path,
    patterns: &[String],
    observer: &mut dyn SyncObserver,
) -> SyncReport {
    let mut report = SyncReport::new();

    if !source_root.is_dir() {
        observer.entry_failed(
            source_root,
            &anyhow!("source root is not a readable directory"),
        );
        report.failures = report.failures.saturating_add(1);
        return report;
    }

    for pattern in patterns {
        observer.pattern_started(pattern);
        for entry in find_matches(source_root, pattern) {
            let Ok(rel) = entry.path.strip_prefix(source_root) else {
                // The matcher only yields paths under the source root.
                continue;
            };
            let task = CopyTask {
                target: target_root.join(rel),
                source: entry.path,
                kind: entry.kind,
            };
            match task.kind {
                EntryKind::File => match copy_file(&task.source, &task.target) {
                    Ok(()) => {
                        report.files_copied = report.files_copied.saturating_add(1);
                        observer.entry_copied(&task);
                    }
                    Err(error) => {
                        report.failures = report.failures.saturating_add(1);
                        observer.entry_failed(&task.source, &error);
                    }
                },
                EntryKind::Directory => {
                    let failures_before = report.failures;
                    copy_tree(&task, &mut report, observer);
                    // Only a cleanly copied subtree counts as a copied entry;
                    // partial failures were already reported one by one.
                    if report.failures == failures_before {
                        observer.entry_copied(&task);
                    }
                }
            }
        }
    }

    report
}

/// Copies one file, creating missing parent directories and overwriting
/// any pre-existing target.
fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::copy(source, target)
        .with_context(|| format!("Failed to copy to: {}", target.display()))?;
    Ok(())
}

/// Copies a positively matched directory verbatim: every descendant is
/// copied, with no exclusion filtering on the way down. Uses an
/// explicit work stack so pathologically deep trees cannot exhaust the
/// call stack; directories are created before their children.
fn copy_tree(task: &CopyTask, report: &mut SyncReport, observer: &mut dyn SyncObserver) {
    let mut stack: Vec<(PathBuf, PathBuf)> = vec![(task.source.clone(), task.target.clone())];

    while let Some((source, target)) = stack.pop() {
        if let Err(error) = fs::create_dir_all(&target)
            .with_context(|| format!("Failed to create directory: {}", target.display()))
        {
            report.failures = report.failures.saturating_add(1);
            observer.entry_failed(&source, &error);
            continue;
        }
        report.dirs_copied = report.dirs_copied.saturating_add(1);

        let children = match fs::read_dir(&source)
            .with_context(|| format!("Failed to read directory: {}", source.display()))
        {
            Ok(children) => children,
            Err(error) => {
                report.failures = report.failures.saturating_add(1);
                observer.entry_failed(&source, &error);
                continue;
            }
        };

        for child in children {
            let child = match child {
                Ok(child) => child,
                Err(error) => {
                    report.failures = report.failures.saturating_add(1);
                    observer.entry_failed(&source, &error.into());
                    continue;
                }
            };
            let child_source = child.path();
            let child_target = target.join(child.file_name());
            // DirEntry::file_type does not traverse symlinks, so a link
            // is handled as a file and a link cycle cannot recurse.
            let child_is_dir = child.file_type().is_ok_and(|t| t.is_dir());
            if child_is_dir {
                stack.push((child_source, child_target));
            } else {
                match copy_file(&child_source, &child_target) {
                    Ok(()) => {
                        report.files_copied = report.files_copied.saturating_add(1);
                    }
                    Err(error) => {
                        report.failures = report.failures.saturating_add(1);
                        observer.entry_failed(&child_source, &error);
                    }
                }
            }
        }
    }
}
