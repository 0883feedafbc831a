//! Print the metadata recorded by the last install or update.

use anyhow::Result;

use crate::paths::Paths;
use crate::state;
use crate::ui;

pub fn run() -> Result<()> {
    let paths = Paths::resolve()?;

    let Some(state) = state::load(&paths.state_file)? else {
        ui::warn("Not installed.");
        return Ok(());
    };

    let installed = if state.skills.is_empty() {
        "none".to_string()
    } else {
        state.skills.join(", ")
    };

    println!();
    println!("  Version:   {}", state.revision);
    println!("  Scope:     {}", state.scope);
    println!("  Skills:    {}", state.skills.len());
    println!("  Installed: {installed}");
    println!("  Date:      {}", state.updated_at.to_rfc3339());
    println!("  Target:    {}", state.target.display());
    println!();

    Ok(())
}
