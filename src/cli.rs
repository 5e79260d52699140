// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::effective_patterns;
use crate::core::sync::{ConsoleObserver, synchronize};
use crate::git;
use crate::utils::absolute_dir;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a worktree for a branch and populate it with local files
    New {
        /// Branch to check out (created if it does not exist)
        branch: String,

        /// Where to create the worktree (defaults to a sibling directory
        /// of the repository)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Skip local file synchronization
        #[arg(long)]
        no_sync: bool,
    },

    /// Copy local files from a source tree into an existing directory
    Sync {
        /// Directory to populate
        target: PathBuf,

        /// Source tree to copy from
        #[arg(short, long, default_value = ".")]
        source: PathBuf,
    },

    /// List worktrees attached to the current repository
    List,

    /// Remove a worktree
    Remove {
        /// Path of the worktree to remove
        path: PathBuf,

        /// Remove even if the worktree is dirty
        #[arg(short, long)]
        force: bool,
    },
}

/// Dispatches a parsed command line.
///
/// # Errors
///
/// Returns an error when the worktree operation itself fails (not in a
/// repository, git unavailable, worktree already exists). Local file
/// synchronization is best-effort and never turns into an error here.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::New {
            branch,
            path,
            no_sync,
        } => new_worktree(&branch, path, no_sync),
        Command::Sync { target, source } => {
            let source = absolute_dir(&source)?;
            sync_local_files(&source, &target);
            Ok(())
        }
        Command::List => list_worktrees(),
        Command::Remove { path, force } => {
            let repo = git::repo_root(Path::new("."))?;
            git::remove_worktree(&repo, &path, force)?;
            println!("Removed worktree {}", path.display());
            Ok(())
        }
    }
}

fn new_worktree(branch: &str, path: Option<PathBuf>, no_sync: bool) -> Result<()> {
    let repo = git::repo_root(Path::new("."))?;
    let target = path.unwrap_or_else(|| default_worktree_path(&repo, branch));
    let create_branch = !git::branch_exists(&repo, branch);

    git::add_worktree(&repo, &target, branch, create_branch)?;
    println!("Created worktree {} for '{branch}'", target.display());

    // The worktree exists from here on; a failed sync only means fewer
    // local files in it.
    if !no_sync {
        sync_local_files(&repo, &target);
    }
    Ok(())
}

fn sync_local_files(source: &Path, target: &Path) {
    let patterns = effective_patterns(source);
    let mut observer = ConsoleObserver;
    let report = synchronize(source, target, &patterns, &mut observer);
    println!(
        "Local files: {} copied ({} files, {} directories), {} failed",
        report.total_copied(),
        report.files_copied,
        report.dirs_copied,
        report.failures
    );
}

fn list_worktrees() -> Result<()> {
    let repo = git::repo_root(Path::new("."))?;
    for worktree in git::list_worktrees(&repo)? {
        println!(
            "{}  {}",
            worktree.path.display(),
            worktree.branch.as_deref().unwrap_or("(detached)")
        );
    }
    Ok(())
}

/// Sibling directory named `<repo>-<branch>`, with `/` in branch names
/// flattened to `-` so feature branches stay on one level.
fn default_worktree_path(repo: &Path, branch: &str) -> PathBuf {
    let repo_name = repo
        .file_name()
        .map_or_else(|| "worktree".to_owned(), |n| n.to_string_lossy().into_owned());
    let slug = branch.replace('/', "-");
    repo.parent()
        .unwrap_or(repo)
        .join(format!("{repo_name}-{slug}"))
}
