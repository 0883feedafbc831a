//! Symlink materialization of selected bundles into a target directory.
//!
//! Linking is idempotent by reconstruction: an existing managed symlink
//! is removed and recreated rather than checked for correctness. A real
//! directory at the destination is never touched. One bad entry does not
//! abort the batch.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::ui;

/// Per-bundle result of a link attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    SkippedExistingDir,
}

/// Batch summary across all requested bundles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkReport {
    pub linked: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Link every name in `names` from `source_dir` into `target_dir`.
///
/// The target directory is created up front; that is the only fatal
/// failure here. Per-bundle errors are reported and counted.
pub fn link_all(names: &[String], source_dir: &Path, target_dir: &Path) -> Result<LinkReport> {
    fs::create_dir_all(target_dir)
        .with_context(|| format!("failed to create {}", target_dir.display()))?;

    let mut report = LinkReport::default();
    for name in names {
        match link_one(name, source_dir, target_dir) {
            Ok(LinkOutcome::Linked) => {
                ui::ok(name);
                report.linked += 1;
            }
            Ok(LinkOutcome::SkippedExistingDir) => {
                ui::warn(&format!(
                    "Skipping '{name}' - directory exists (not managed by this installer)"
                ));
                report.skipped += 1;
            }
            Err(err) => {
                ui::warn(&format!("Failed to link '{name}': {err}"));
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

fn link_one(name: &str, source_dir: &Path, target_dir: &Path) -> std::io::Result<LinkOutcome> {
    let src = source_dir.join(name);
    let dest = target_dir.join(name);

    if let Ok(meta) = fs::symlink_metadata(&dest) {
        if meta.file_type().is_symlink() {
            fs::remove_file(&dest)?;
        } else if meta.is_dir() {
            return Ok(LinkOutcome::SkippedExistingDir);
        }
        // Anything else at the destination makes the symlink call fail
        // and gets reported per-bundle.
    }

    symlink_dir(&src, &dest)?;
    Ok(LinkOutcome::Linked)
}

#[cfg(unix)]
fn symlink_dir(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(src, dest)
}

#[cfg(windows)]
fn symlink_dir(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dest)
}

/// Remove symlinks under `target_dir` whose target lies inside
/// `install_root`. Real directories and foreign symlinks sharing the
/// naming pattern are left alone. Returns the number removed.
pub fn remove_managed_links(target_dir: &Path, install_root: &Path) -> usize {
    let Ok(entries) = fs::read_dir(target_dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(meta) = fs::symlink_metadata(&path) else {
            continue;
        };
        if !meta.file_type().is_symlink() {
            continue;
        }
        let Ok(link_target) = fs::read_link(&path) else {
            continue;
        };
        if link_target.starts_with(install_root) && fs::remove_file(&path).is_ok() {
            ui::ok(&format!("Removed: {}", entry.file_name().to_string_lossy()));
            removed += 1;
        }
    }
    removed
}
