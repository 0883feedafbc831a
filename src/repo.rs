//! Git-backed sync of the remote skills repository.
//!
//! The clone under the install root is disposable: it is never edited
//! locally and is advanced by reset-to-origin, so any sync failure leaves
//! the previous checkout intact.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::paths::{Paths, BRANCH, REMOTE_URL};
use crate::ui;

/// Probe for git before doing anything with side effects.
pub fn ensure_git() -> Result<()> {
    match Command::new("git").arg("--version").output() {
        Ok(out) if out.status.success() => Ok(()),
        _ => bail!("git is required. Install it first."),
    }
}

/// Run a git subcommand with captured output, surfacing stderr on failure.
fn git(dir: Option<&Path>, args: &[&str]) -> Result<String> {
    let mut cmd = Command::new("git");
    if let Some(dir) = dir {
        cmd.arg("-C").arg(dir);
    }
    let output = cmd
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {}", args.join(" ")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "git {} failed: {}",
            args.first().copied().unwrap_or_default(),
            stderr.trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Clone on first run, fast-forward reset to origin on subsequent runs.
/// Returns the short revision of the resulting head.
pub fn sync(paths: &Paths) -> Result<String> {
    std::fs::create_dir_all(&paths.install_dir)
        .with_context(|| format!("failed to create {}", paths.install_dir.display()))?;

    if paths.repo_dir.exists() {
        ui::info("Pulling latest...");
        git(Some(&paths.repo_dir), &["fetch", "origin", BRANCH, "--quiet"])?;
        git(
            Some(&paths.repo_dir),
            &["reset", "--hard", &format!("origin/{BRANCH}"), "--quiet"],
        )?;
    } else {
        ui::info("Cloning repository...");
        let dest = paths.repo_dir.to_string_lossy();
        git(
            None,
            &["clone", "--depth", "1", "--branch", BRANCH, REMOTE_URL, &dest],
        )?;
    }

    head_revision(paths)
}

/// Short hash of the clone's current head.
pub fn head_revision(paths: &Paths) -> Result<String> {
    git(Some(&paths.repo_dir), &["rev-parse", "--short", "HEAD"])
        .context("failed to resolve repository head")
}
