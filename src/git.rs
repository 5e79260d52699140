// src/git.rs
use anyhow::{Context as _, Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;

/// One worktree as reported by `git worktree list --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worktree {
    pub path: PathBuf,
    pub head: Option<String>,
    pub branch: Option<String>,
}

fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Resolves the repository root containing `dir`.
///
/// # Errors
///
/// Returns an error if `dir` is not inside a git repository or git
/// cannot be run.
pub fn repo_root(dir: &Path) -> Result<PathBuf> {
    let output = run_git(dir, &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(output.trim()))
}

/// Whether a local branch with the given name exists.
#[must_use]
pub fn branch_exists(repo: &Path, branch: &str) -> bool {
    run_git(
        repo,
        &[
            "rev-parse",
            "--verify",
            "--quiet",
            &format!("refs/heads/{branch}"),
        ],
    )
    .is_ok()
}

/// Creates a worktree at `path` for `branch`, creating the branch first
/// when `create_branch` is set.
///
/// # Errors
///
/// Returns an error carrying git's stderr if the worktree cannot be
/// created (path occupied, branch already checked out elsewhere, ...).
pub fn add_worktree(repo: &Path, path: &Path, branch: &str, create_branch: bool) -> Result<()> {
    let path_lossy = path.to_string_lossy();
    let path_str = path_lossy.as_ref();
    if create_branch {
        run_git(repo, &["worktree", "add", "-b", branch, path_str])?;
    } else {
        run_git(repo, &["worktree", "add", path_str, branch])?;
    }
    Ok(())
}

/// Removes the worktree at `path`.
///
/// # Errors
///
/// Returns an error if git refuses the removal (dirty worktree without
/// `force`, unknown path, ...).
pub fn remove_worktree(repo: &Path, path: &Path, force: bool) -> Result<()> {
    let path_lossy = path.to_string_lossy();
    let mut args = vec!["worktree", "remove"];
    if force {
        args.push("--force");
    }
    args.push(path_lossy.as_ref());
    run_git(repo, &args)?;
    Ok(())
}

/// Lists all worktrees attached to the repository.
///
/// # Errors
///
/// Returns an error if git cannot be run in `repo`.
pub fn list_worktrees(repo: &Path) -> Result<Vec<Worktree>> {
    let output = run_git(repo, &["worktree", "list", "--porcelain"])?;
    Ok(parse_worktree_list(&output))
}

/// Parses porcelain output: records are separated by blank lines, each
/// starting with a `worktree <path>` line.
#[must_use]
pub fn parse_worktree_list(output: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut current: Option<Worktree> = None;

    for line in output.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(finished) = current.take() {
                worktrees.push(finished);
            }
            current = Some(Worktree {
                path: PathBuf::from(path),
                head: None,
                branch: None,
            });
        } else if let Some(head) = line.strip_prefix("HEAD ") {
            if let Some(worktree) = current.as_mut() {
                worktree.head = Some(head.to_owned());
            }
        } else if let Some(branch) = line.strip_prefix("branch ") {
            if let Some(worktree) = current.as_mut() {
                worktree.branch = Some(branch.strip_prefix("refs/heads/").unwrap_or(branch).to_owned());
            }
        }
    }
    if let Some(finished) = current {
        worktrees.push(finished);
    }
    worktrees
}
