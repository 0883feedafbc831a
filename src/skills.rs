//! Skill bundle discovery over the cloned repository.
//!
//! A bundle is any immediate subdirectory of the skills source that
//! carries a `SKILL.md` descriptor. The one-line description shown in
//! listings comes from the descriptor's `description:` field.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

pub const DESCRIPTOR_FILE: &str = "SKILL.md";

const MAX_DESCRIPTION_LEN: usize = 90;
const NO_DESCRIPTION: &str = "No description";

static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^description:\s*(.+)$").expect("valid description regex"));

/// A discoverable skill bundle. Recomputed on every scan, never persisted
/// beyond its name.
#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    pub description: String,
}

/// Scan `source_dir` for skill bundles, sorted by name.
///
/// Subdirectories without a descriptor are skipped silently; an absent
/// `source_dir` is an error (the clone is expected to provide it).
pub fn discover(source_dir: &Path) -> Result<Vec<Skill>> {
    if !source_dir.is_dir() {
        bail!("no skills directory found in repo");
    }

    let mut skills = Vec::new();
    for entry in std::fs::read_dir(source_dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let descriptor = path.join(DESCRIPTOR_FILE);
        if !descriptor.exists() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let description = std::fs::read_to_string(&descriptor)
            .ok()
            .and_then(|content| extract_description(&content))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        skills.push(Skill { name, description });
    }

    skills.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(skills)
}

/// First `description:` line of the descriptor, truncated for display.
fn extract_description(content: &str) -> Option<String> {
    DESCRIPTION_RE.captures(content).map(|caps| {
        caps[1]
            .trim()
            .chars()
            .take(MAX_DESCRIPTION_LEN)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_skill(root: &Path, name: &str, descriptor: Option<&str>) {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        if let Some(content) = descriptor {
            std::fs::write(dir.join(DESCRIPTOR_FILE), content).unwrap();
        }
    }

    #[test]
    fn test_discover_mixed_bundles() {
        let temp = TempDir::new().unwrap();
        write_skill(
            temp.path(),
            "alpha",
            Some("---\nname: alpha\ndescription: Does alpha things\n---\n\nBody.\n"),
        );
        write_skill(temp.path(), "beta", None);
        write_skill(temp.path(), "gamma", Some("# gamma\n\nJust a heading.\n"));

        let skills = discover(temp.path()).unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "alpha");
        assert_eq!(skills[0].description, "Does alpha things");
        assert_eq!(skills[1].name, "gamma");
        assert_eq!(skills[1].description, "No description");
    }

    #[test]
    fn test_discover_sorted_and_skips_files() {
        let temp = TempDir::new().unwrap();
        write_skill(temp.path(), "zeta", Some("description: z\n"));
        write_skill(temp.path(), "acme", Some("description: a\n"));
        std::fs::write(temp.path().join("README.md"), "not a skill").unwrap();

        let skills = discover(temp.path()).unwrap();
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["acme", "zeta"]);
    }

    #[test]
    fn test_discover_missing_source_dir() {
        let temp = TempDir::new().unwrap();
        assert!(discover(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_description_truncated() {
        let long = "x".repeat(200);
        let desc = extract_description(&format!("description: {long}\n")).unwrap();
        assert_eq!(desc.len(), 90);
    }

    #[test]
    fn test_description_first_match_at_line_start() {
        let content = "intro\n  description: indented, ignored\ndescription: the real one\ndescription: later, ignored\n";
        assert_eq!(
            extract_description(content).unwrap(),
            "the real one"
        );
    }
}
