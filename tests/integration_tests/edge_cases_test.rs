// tests/integration_tests/edge_cases_test.rs
use crate::common::{create_test_file, matched_relative, patterns};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use wtlocal::{SyncObserver, synchronize};

struct QuietObserver;

impl SyncObserver for QuietObserver {}

#[test]
fn test_backslash_pattern_behaves_like_forward_slash() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "conf/app.local.toml", "a = 1")?;

    let forward = matched_relative(dir.path(), "conf/*.local.*");
    let backward = matched_relative(dir.path(), "conf\\*.local.*");
    assert_eq!(forward, backward);
    assert_eq!(forward, vec!["conf/app.local.toml"]);
    Ok(())
}

#[test]
fn test_empty_pattern_list_copies_nothing() -> Result<()> {
    let source = TempDir::new()?;
    let target = TempDir::new()?;
    create_test_file(source.path(), ".env", "E=1")?;

    let report = synchronize(source.path(), target.path(), &[], &mut QuietObserver);

    assert!(report.is_clean());
    assert_eq!(report.total_copied(), 0);
    assert!(!target.path().join(".env").exists());
    Ok(())
}

#[test]
fn test_parent_segment_pattern_writes_nothing_outside_target() -> Result<()> {
    let outer = TempDir::new()?;
    let source = outer.path().join("source");
    let target = outer.path().join("target");
    fs::create_dir_all(&source)?;
    fs::create_dir_all(&target)?;
    create_test_file(outer.path(), "victim.txt", "outside both roots")?;

    let report = synchronize(
        &source,
        &target,
        &patterns(&["../victim.txt"]),
        &mut QuietObserver,
    );

    assert_eq!(report.total_copied(), 0);
    assert_eq!(
        fs::read_to_string(outer.path().join("victim.txt"))?,
        "outside both roots",
        "file outside the roots is untouched"
    );
    assert!(fs::read_dir(&target)?.next().is_none(), "target stays empty");
    Ok(())
}

#[test]
fn test_empty_string_pattern_copies_nothing() -> Result<()> {
    let source = TempDir::new()?;
    let target = TempDir::new()?;
    create_test_file(source.path(), "unrelated.rs", "fn x() {}")?;

    let report = synchronize(
        source.path(),
        target.path(),
        &patterns(&["", "."]),
        &mut QuietObserver,
    );

    assert!(report.is_clean());
    assert_eq!(report.total_copied(), 0);
    assert!(!target.path().join("unrelated.rs").exists());
    Ok(())
}

#[test]
fn test_pattern_without_matches_is_harmless() -> Result<()> {
    let source = TempDir::new()?;
    let target = TempDir::new()?;
    create_test_file(source.path(), "readme.md", "hi")?;

    let report = synchronize(
        source.path(),
        target.path(),
        &patterns(&["**/.env*", "nope/missing.txt"]),
        &mut QuietObserver,
    );

    assert!(report.is_clean());
    assert_eq!(report.total_copied(), 0);
    Ok(())
}

#[test]
fn test_partially_populated_target_is_topped_up() -> Result<()> {
    let source = TempDir::new()?;
    let target = TempDir::new()?;
    create_test_file(source.path(), ".env", "NEW=1")?;
    create_test_file(source.path(), "api/.env", "API=1")?;
    create_test_file(target.path(), ".env", "STALE=0")?;

    let report = synchronize(
        source.path(),
        target.path(),
        &patterns(&["**/.env*"]),
        &mut QuietObserver,
    );

    assert!(report.is_clean());
    assert_eq!(
        std::fs::read_to_string(target.path().join(".env"))?,
        "NEW=1",
        "pre-existing target files are overwritten"
    );
    assert!(target.path().join("api/.env").exists());
    Ok(())
}

#[test]
fn test_deeply_nested_directory_copy() -> Result<()> {
    let source = TempDir::new()?;
    let target = TempDir::new()?;

    let mut deep = String::from("stack.local.d");
    for i in 0..60 {
        deep.push_str(&format!("/level{i}"));
    }
    create_test_file(source.path(), &format!("{deep}/leaf.txt"), "leaf")?;

    let report = synchronize(
        source.path(),
        target.path(),
        &patterns(&["*.local.*"]),
        &mut QuietObserver,
    );

    assert!(report.is_clean());
    let mut expected = target.path().join("stack.local.d");
    for i in 0..60 {
        expected = expected.join(format!("level{i}"));
    }
    assert!(expected.join("leaf.txt").exists());
    Ok(())
}

#[test]
fn test_question_mark_matches_single_character_only() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "env.a", "1")?;
    create_test_file(dir.path(), "env.ab", "2")?;

    let matched = matched_relative(dir.path(), "env.?");
    assert_eq!(matched, vec!["env.a"]);
    Ok(())
}
