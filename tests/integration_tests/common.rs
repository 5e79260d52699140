// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn patterns(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|p| (*p).to_owned()).collect()
}

/// Relative forward-slash paths of all matches for `pattern` under `root`.
pub fn matched_relative(root: &Path, pattern: &str) -> Vec<String> {
    wtlocal::find_matches(root, pattern)
        .iter()
        .filter_map(|entry| wtlocal::utils::relative_slash_path(root, &entry.path))
        .collect()
}

/// A source tree with local files at several depths plus noise that
/// should never be picked up by the default patterns.
pub fn setup_source_tree() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();

    create_test_file(root, ".env", "ROOT=1")?;
    create_test_file(root, "api/.env.local", "API=1")?;
    create_test_file(root, "api/deep/.env.prod", "PROD=1")?;
    create_test_file(root, "db.local.json", "{}")?;
    create_test_file(root, ".vscode/settings.json", "{\"editor\": true}")?;

    create_test_file(root, "src/main.rs", "fn main() {}")?;
    create_test_file(root, "api/envfile", "not an env file")?;
    create_test_file(root, "node_modules/pkg/.env", "NOISE=1")?;

    Ok(dir)
}
