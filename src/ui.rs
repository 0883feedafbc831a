//! Colored terminal output.
//!
//! All user-facing lines go through the leveled helpers here so the
//! `[INFO]`/`[OK]`/`[WARN]`/`[ERROR]` prefixes stay consistent across
//! commands. Colors are dropped when stdout is not a terminal or when
//! `NO_COLOR` is set.

use once_cell::sync::Lazy;
use std::io::IsTerminal;

static COLOR: Lazy<bool> =
    Lazy::new(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal());

fn paint(text: &str, code: &str) -> String {
    if *COLOR {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint(text, "1")
}

pub fn dim(text: &str) -> String {
    paint(text, "2")
}

pub fn green(text: &str) -> String {
    paint(text, "32")
}

pub fn cyan(text: &str) -> String {
    paint(text, "36")
}

pub fn info(msg: &str) {
    println!("{} {}", paint("[INFO]", "34"), msg);
}

pub fn ok(msg: &str) {
    println!("{} {}", paint("  [OK]", "32"), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", paint("[WARN]", "33"), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", paint("[ERROR]", "31"), msg);
}
