//! Interactive selection: a pure free-text parser plus the blocking
//! line reads that feed it.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::HashSet;

use crate::skills::Skill;
use crate::ui;

/// What the user asked for, before resolving indices to names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Indices(Vec<usize>),
    None,
}

/// Parse one line of selection input against `count` listed entries.
///
/// `a`/`all` in any case selects everything. Otherwise the input is read
/// as comma-separated 1-based indices; tokens that are not numbers or are
/// out of range are dropped, duplicates are kept as typed. Nothing valid
/// left is `Selection::None` — the caller decides the fallback.
pub fn parse_selection(input: &str, count: usize) -> Selection {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("a") || trimmed.eq_ignore_ascii_case("all") {
        return Selection::All;
    }

    let indices: Vec<usize> = trimmed
        .split(',')
        .filter_map(|tok| tok.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1 && n <= count)
        .collect();

    if indices.is_empty() {
        Selection::None
    } else {
        Selection::Indices(indices)
    }
}

/// One blocking line read. Ctrl-C/Ctrl-D count as an empty answer.
pub fn read_line(prompt: &str) -> Result<String> {
    let mut editor = DefaultEditor::new()?;
    match editor.readline(prompt) {
        Ok(line) => Ok(line.trim().to_string()),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

fn resolve(selection: Selection, skills: &[Skill]) -> Option<Vec<String>> {
    match selection {
        Selection::All => Some(skills.iter().map(|s| s.name.clone()).collect()),
        Selection::Indices(indices) => Some(
            indices
                .into_iter()
                .map(|i| skills[i - 1].name.clone())
                .collect(),
        ),
        Selection::None => None,
    }
}

/// The install-time picker: lists every skill with an index, marks the
/// ones already installed, and falls back to selecting all when the
/// answer parses to nothing.
pub fn select_skills(skills: &[Skill], installed: &HashSet<String>) -> Result<Vec<String>> {
    println!("  {}", ui::bold("Which skills do you want to install?"));
    println!(
        "  {}",
        ui::dim("Enter numbers separated by commas, or 'a' for all")
    );
    println!();

    for (i, skill) in skills.iter().enumerate() {
        let marker = if installed.contains(&skill.name) {
            format!(" {}", ui::green("installed"))
        } else {
            String::new()
        };
        println!(
            "  {}  {}{}",
            ui::green(&(i + 1).to_string()),
            ui::bold(&skill.name),
            marker
        );
        println!("     {}", ui::dim(&skill.description));
        println!();
    }

    let answer = read_line(&format!(
        "  Select [{}=all, or {}]: ",
        ui::bold("a"),
        ui::bold("1,2,...")
    ))?;

    Ok(resolve(parse_selection(&answer, skills.len()), skills).unwrap_or_else(|| {
        ui::warn("No valid selection. Installing all skills.");
        skills.iter().map(|s| s.name.clone()).collect()
    }))
}

/// The update-time sub-prompt for skills published since the last
/// install. Unlike install, an empty or `n`/`no` answer skips them.
pub fn offer_new_skills(fresh: &[Skill]) -> Result<Vec<String>> {
    println!();
    println!("  {}", ui::cyan(&ui::bold("New skills available:")));
    println!();

    for (i, skill) in fresh.iter().enumerate() {
        println!(
            "  {}  {}",
            ui::green(&(i + 1).to_string()),
            ui::bold(&skill.name)
        );
        println!("     {}", ui::dim(&skill.description));
        println!();
    }

    let answer = read_line(&format!(
        "  Install new skills? [{}=all, {}=select, {}=skip]: ",
        ui::bold("a"),
        ui::bold("1,2,..."),
        ui::bold("n")
    ))?;

    if answer.is_empty()
        || answer.eq_ignore_ascii_case("n")
        || answer.eq_ignore_ascii_case("no")
    {
        return Ok(Vec::new());
    }

    Ok(resolve(parse_selection(&answer, fresh.len()), fresh).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_any_case() {
        assert_eq!(parse_selection("a", 3), Selection::All);
        assert_eq!(parse_selection("A", 3), Selection::All);
        assert_eq!(parse_selection("all", 3), Selection::All);
        assert_eq!(parse_selection("ALL", 0), Selection::All);
        assert_eq!(parse_selection("  all  ", 1), Selection::All);
    }

    #[test]
    fn test_valid_indices() {
        assert_eq!(
            parse_selection("1,3", 3),
            Selection::Indices(vec![1, 3])
        );
        assert_eq!(
            parse_selection(" 2 , 1 ", 3),
            Selection::Indices(vec![2, 1])
        );
    }

    #[test]
    fn test_invalid_tokens_dropped() {
        assert_eq!(
            parse_selection("1,xyz,2", 3),
            Selection::Indices(vec![1, 2])
        );
        assert_eq!(
            parse_selection("0,4,2", 3),
            Selection::Indices(vec![2])
        );
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(
            parse_selection("2,2,1", 3),
            Selection::Indices(vec![2, 2, 1])
        );
    }

    #[test]
    fn test_nothing_valid() {
        assert_eq!(parse_selection("99,xyz", 3), Selection::None);
        assert_eq!(parse_selection("", 3), Selection::None);
        assert_eq!(parse_selection("1", 0), Selection::None);
    }

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_resolve_indices_to_names() {
        let skills = vec![skill("alpha"), skill("beta"), skill("gamma")];
        assert_eq!(
            resolve(Selection::Indices(vec![3, 1]), &skills).unwrap(),
            vec!["gamma", "alpha"]
        );
        assert_eq!(
            resolve(Selection::All, &skills).unwrap(),
            vec!["alpha", "beta", "gamma"]
        );
        assert!(resolve(Selection::None, &skills).is_none());
    }
}
