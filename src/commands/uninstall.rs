//! Remove managed symlinks and wipe the install root.

use anyhow::{Context, Result};
use std::fs;

use crate::linker;
use crate::paths::{Paths, Scope};
use crate::prompt;
use crate::state;
use crate::ui;

pub fn run() -> Result<()> {
    let paths = Paths::resolve()?;

    if !paths.install_dir.exists() {
        ui::warn("Nothing to uninstall.");
        return Ok(());
    }

    let answer = prompt::read_line("Remove all managed skills? (y/N): ")?;
    if !answer.eq_ignore_ascii_case("y") {
        ui::info("Cancelled.");
        return Ok(());
    }

    // A corrupt or missing state file must not block uninstall; fall back
    // to the global target and still wipe the install root.
    let target_dir = match state::load(&paths.state_file) {
        Ok(Some(state)) => state.target,
        _ => Scope::Global.target_dir()?,
    };

    linker::remove_managed_links(&target_dir, &paths.install_dir);

    fs::remove_dir_all(&paths.install_dir)
        .with_context(|| format!("failed to remove {}", paths.install_dir.display()))?;
    ui::ok("Uninstalled.");

    Ok(())
}
