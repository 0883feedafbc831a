//! List every discoverable skill with its installed/available status.

use anyhow::Result;
use std::collections::HashSet;

use crate::paths::Paths;
use crate::skills;
use crate::state;
use crate::ui;

pub fn run() -> Result<()> {
    let paths = Paths::resolve()?;

    if !paths.repo_dir.exists() {
        ui::warn("No skills installed. Run: skillrack install");
        return Ok(());
    }

    let installed: HashSet<String> = state::load(&paths.state_file)?
        .map(|s| s.skills.into_iter().collect())
        .unwrap_or_default();
    let available = skills::discover(&paths.skills_source())?;

    println!();
    println!("{}", ui::cyan(&ui::bold("  Skillrack")));
    println!("  {}", "\u{2500}".repeat(40));

    for skill in &available {
        let status = if installed.contains(&skill.name) {
            ui::green(" installed")
        } else {
            ui::dim(" available")
        };
        println!("  {}{status}", ui::green(&skill.name));
        println!("  {}", ui::dim(&skill.description));
        println!();
    }

    Ok(())
}
