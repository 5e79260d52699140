// src/utils.rs
use anyhow::Result;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Renders `path` relative to `root` in forward-slash form, regardless
/// of the host separator. Returns `None` when `path` is not under
/// `root` or contains non-UTF-8 components.
#[must_use]
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut out = String::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(part.to_str()?);
        }
    }
    Some(out)
}

/// Joins a forward-slash relative path onto `root` segment by segment,
/// so the result uses the host separator.
#[must_use]
pub fn join_slash_path(root: &Path, relative: &str) -> PathBuf {
    let mut joined = root.to_path_buf();
    for segment in relative.split('/').filter(|s| !s.is_empty()) {
        joined.push(segment);
    }
    joined
}

/// Resolves `dir` against the current working directory when relative.
///
/// # Errors
///
/// Returns an error if the current working directory cannot be read.
pub fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}
