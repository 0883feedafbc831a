//! Fixed filesystem layout for the installer.
//!
//! Everything the tool owns lives under `~/.skillrack`: the cloned skills
//! repository and the state file. Skill symlinks land outside of it, in
//! the scope-dependent `.claude/skills` target directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const REMOTE_URL: &str = "https://github.com/skillrack/skills.git";
pub const BRANCH: &str = "main";

const INSTALL_DIR_NAME: &str = ".skillrack";
const SKILLS_SUBDIR: &str = "skills";
const STATE_FILE_NAME: &str = "state.json";

/// Resolved locations of the install root and everything inside it.
#[derive(Debug, Clone)]
pub struct Paths {
    /// `~/.skillrack` — holds the clone and the state file.
    pub install_dir: PathBuf,
    /// `~/.skillrack/repo` — local clone of the remote skills repository.
    pub repo_dir: PathBuf,
    /// `~/.skillrack/state.json`
    pub state_file: PathBuf,
}

impl Paths {
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        let install_dir = home.join(INSTALL_DIR_NAME);
        let repo_dir = install_dir.join("repo");
        let state_file = install_dir.join(STATE_FILE_NAME);
        Ok(Self {
            install_dir,
            repo_dir,
            state_file,
        })
    }

    /// Directory inside the clone that holds the skill bundles.
    pub fn skills_source(&self) -> PathBuf {
        self.repo_dir.join(SKILLS_SUBDIR)
    }
}

/// Where skills get linked: for every project of the user, or this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Project,
}

impl Scope {
    /// The `.claude/skills` directory this scope links into.
    pub fn target_dir(&self) -> Result<PathBuf> {
        let base = match self {
            Scope::Global => dirs::home_dir().context("could not determine home directory")?,
            Scope::Project => {
                std::env::current_dir().context("could not determine current directory")?
            }
        };
        Ok(base.join(".claude").join(SKILLS_SUBDIR))
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Project => write!(f, "project"),
        }
    }
}
