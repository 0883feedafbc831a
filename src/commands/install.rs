//! Interactive install: choose scope, sync the repo, pick skills, link.

use anyhow::Result;
use std::collections::HashSet;

use crate::linker;
use crate::paths::{Paths, Scope};
use crate::prompt;
use crate::repo;
use crate::skills;
use crate::state::{self, InstallState};
use crate::ui;

pub fn run() -> Result<()> {
    let paths = Paths::resolve()?;

    println!();
    println!("{}", ui::cyan(&ui::bold("  Skillrack")));
    println!("{}", ui::dim("  Curated skill collection for Claude Code"));
    println!();

    repo::ensure_git()?;

    println!("  {}", ui::bold("Where should skills be installed?"));
    println!();
    println!("  {}  Global {}", ui::green("1"), ui::dim("(~/.claude/skills/)"));
    println!("     Available in all your projects");
    println!();
    println!("  {}  Project {}", ui::green("2"), ui::dim("(.claude/skills/)"));
    println!("     Only this project, can commit to git for team sharing");
    println!();

    let choice = prompt::read_line(&format!("  Choose [{}/{}]: ", ui::bold("1"), ui::bold("2")))?;
    let scope = if choice == "2" {
        Scope::Project
    } else {
        Scope::Global
    };
    let target_dir = scope.target_dir()?;
    match scope {
        Scope::Project => ui::info(&format!("Installing to project: {}", target_dir.display())),
        Scope::Global => ui::info(&format!("Installing globally: {}", target_dir.display())),
    }

    println!();
    let revision = repo::sync(&paths)?;

    let available = skills::discover(&paths.skills_source())?;
    let installed: HashSet<String> = state::load(&paths.state_file)?
        .map(|s| s.skills.into_iter().collect())
        .unwrap_or_default();

    println!();
    let selected = prompt::select_skills(&available, &installed)?;

    println!();
    ui::info("Linking skills...");
    let report = linker::link_all(&selected, &paths.skills_source(), &target_dir)?;

    state::save(
        &paths.state_file,
        &InstallState::new(revision, scope, target_dir, selected),
    )?;

    println!();
    println!(
        "{} {} skill(s) installed ({scope}).",
        ui::green(&ui::bold("  Done!")),
        report.linked
    );
    println!();
    println!("  {}  skillrack update", ui::dim("Update anytime:"));
    println!("  {}     skillrack list", ui::dim("List skills:"));
    println!("  {}       skillrack uninstall", ui::dim("Uninstall:"));
    println!();

    Ok(())
}
