// tests/integration_tests/matching_test.rs
use crate::common::{create_test_file, matched_relative, setup_source_tree};
use anyhow::Result;
use tempfile::TempDir;
use wtlocal::EntryKind;

#[test]
fn test_literal_pattern_is_exact_lookup() -> Result<()> {
    let dir = setup_source_tree()?;

    let matches = wtlocal::find_matches(dir.path(), ".vscode/settings.json");
    assert_eq!(matches.len(), 1, "exactly one result for an existing path");
    assert_eq!(
        matches[0].path,
        dir.path().join(".vscode").join("settings.json")
    );

    let missing = wtlocal::find_matches(dir.path(), "does/not/exist.txt");
    assert!(missing.is_empty(), "no result for a missing literal path");
    Ok(())
}

#[test]
fn test_env_pattern_matches_all_depths() -> Result<()> {
    let dir = setup_source_tree()?;

    let matched = matched_relative(dir.path(), "**/.env*");
    assert!(matched.contains(&".env".to_owned()));
    assert!(matched.contains(&"api/.env.local".to_owned()));
    assert!(matched.contains(&"api/deep/.env.prod".to_owned()));
    assert!(
        !matched.contains(&"api/envfile".to_owned()),
        "file without the leading dot must not match"
    );
    Ok(())
}

#[test]
fn test_unanchored_pattern_does_not_reach_subdirectories() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "db.local.json", "{}")?;
    create_test_file(dir.path(), "two/levels/db.local.json", "{}")?;

    let matched = matched_relative(dir.path(), "*.local.*");
    assert_eq!(matched, vec!["db.local.json"]);

    let anchored = matched_relative(dir.path(), "**/*.local.*");
    assert_eq!(anchored, vec!["db.local.json", "two/levels/db.local.json"]);
    Ok(())
}

#[test]
fn test_results_follow_walk_order_deterministically() -> Result<()> {
    let dir = setup_source_tree()?;

    let first = matched_relative(dir.path(), "**/.env*");
    let second = matched_relative(dir.path(), "**/.env*");
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_directory_entries_can_match() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "overrides.local.d/a.conf", "a")?;

    let matches = wtlocal::find_matches(dir.path(), "*.local.*");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, EntryKind::Directory);
    Ok(())
}

#[test]
fn test_git_metadata_is_matchable() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), ".git/hooks/pre-commit.local.sh", "#!/bin/sh")?;

    let matched = matched_relative(dir.path(), "**/*.local.*");
    assert_eq!(matched, vec![".git/hooks/pre-commit.local.sh"]);
    Ok(())
}
