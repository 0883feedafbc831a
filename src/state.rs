//! Persisted installation state.
//!
//! One JSON record under the install root, rewritten wholesale by every
//! command that changes membership. An absent file means "never
//! installed" and is not an error. Last writer wins; there is no lock.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::Scope;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallState {
    /// Short revision of the clone at save time.
    pub revision: String,
    pub updated_at: DateTime<Utc>,
    pub scope: Scope,
    /// Directory the symlinks were created in.
    pub target: PathBuf,
    /// Names of installed bundles, in selection order.
    pub skills: Vec<String>,
}

impl InstallState {
    pub fn new(revision: String, scope: Scope, target: PathBuf, skills: Vec<String>) -> Self {
        Self {
            revision,
            updated_at: Utc::now(),
            scope,
            target,
            skills: dedup(skills),
        }
    }
}

/// Selection input may carry duplicates; the persisted list does not.
fn dedup(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names.into_iter().filter(|n| seen.insert(n.clone())).collect()
}

pub fn save(path: &Path, state: &InstallState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

pub fn load(path: &Path) -> Result<Option<InstallState>> {
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("malformed state file {}", path.display()))?;
    Ok(Some(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        let state = InstallState::new(
            "abc1234".to_string(),
            Scope::Project,
            PathBuf::from("/tmp/proj/.claude/skills"),
            vec!["alpha".to_string(), "gamma".to_string()],
        );

        save(&path, &state).unwrap();
        let loaded = load(&path).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_absent_file_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(load(&temp.path().join("state.json")).unwrap().is_none());
    }

    #[test]
    fn test_duplicates_dropped_on_construction() {
        let state = InstallState::new(
            "abc1234".to_string(),
            Scope::Global,
            PathBuf::from("/home/u/.claude/skills"),
            vec!["a".to_string(), "b".to_string(), "a".to_string()],
        );
        assert_eq!(state.skills, vec!["a", "b"]);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("state.json");
        let state = InstallState::new(
            "abc1234".to_string(),
            Scope::Global,
            PathBuf::from("/home/u/.claude/skills"),
            Vec::new(),
        );
        save(&path, &state).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, "not json").unwrap();
        assert!(load(&path).is_err());
    }
}
