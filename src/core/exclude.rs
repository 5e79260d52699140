// src/core/exclude.rs

/// Directory names skipped during traversal unless the active pattern
/// names them. Build output and dependency caches are never wanted in a
/// fresh worktree, so hiding them keeps scans fast and results quiet.
///
/// `.git` is deliberately absent: local override files sometimes live
/// under version-control metadata (hooks, `info/exclude`), so that
/// directory stays walkable like any other.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "target", "dist", "build", "out", ".cache"];

/// Decides whether the walker may enumerate and descend into a
/// directory with the given name while matching `active_pattern`.
///
/// The waiver is a substring check over the raw pattern text, not an
/// analysis of the compiled matcher. A pattern that merely happens to
/// contain a deny-listed name therefore waives the exclusion too.
// TODO: decide whether the substring waiver should require a full path
// segment instead; current behavior is relied on by callers.
#[must_use]
pub fn should_descend(dir_name: &str, active_pattern: &str) -> bool {
    if EXCLUDED_DIRS.contains(&dir_name) {
        return active_pattern.contains(dir_name);
    }
    true
}
