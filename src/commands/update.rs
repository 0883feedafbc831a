//! Update: refresh the clone, re-link what was installed, and offer
//! skills published since the last run (add-only; deselection happens
//! through install or uninstall).

use anyhow::{bail, Result};

use crate::linker;
use crate::paths::{Paths, Scope};
use crate::prompt;
use crate::repo;
use crate::skills::{self, Skill};
use crate::state::{self, InstallState};
use crate::ui;

pub fn run() -> Result<()> {
    let paths = Paths::resolve()?;

    repo::ensure_git()?;

    if !paths.repo_dir.exists() {
        bail!("Not installed yet. Run: skillrack install");
    }

    let prior = state::load(&paths.state_file)?;
    let old_revision = repo::head_revision(&paths)?;
    let new_revision = repo::sync(&paths)?;

    let (scope, target_dir) = match &prior {
        Some(s) => (s.scope, s.target.clone()),
        None => (Scope::Global, Scope::Global.target_dir()?),
    };
    let current: Vec<String> = prior.map(|s| s.skills).unwrap_or_default();

    // Refresh links for everything already installed; stale names whose
    // source disappeared upstream surface as per-bundle warnings.
    if !current.is_empty() {
        ui::info("Updating installed skills...");
        linker::link_all(&current, &paths.skills_source(), &target_dir)?;
    }

    let available = skills::discover(&paths.skills_source())?;
    let fresh: Vec<Skill> = available
        .into_iter()
        .filter(|s| !current.contains(&s.name))
        .collect();
    let fresh_count = fresh.len();

    let mut installed = current;
    if !fresh.is_empty() {
        let added = prompt::offer_new_skills(&fresh)?;
        if !added.is_empty() {
            ui::info("Installing new skills...");
            linker::link_all(&added, &paths.skills_source(), &target_dir)?;
            installed.extend(added);
        }
    }

    let next = InstallState::new(new_revision.clone(), scope, target_dir, installed);
    state::save(&paths.state_file, &next)?;

    println!();
    ui::ok(&summary(
        &old_revision,
        &new_revision,
        fresh_count,
        next.skills.len(),
    ));

    Ok(())
}

fn summary(old: &str, new: &str, fresh_count: usize, installed: usize) -> String {
    if old == new && fresh_count == 0 {
        format!("Already on latest ({new})")
    } else {
        format!("Updated {old} -> {new} ({installed} skills installed)")
    }
}
