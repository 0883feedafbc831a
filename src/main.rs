//! skillrack: install curated skill bundles as symlinks into
//! `~/.claude/skills` or a project's `.claude/skills`.

mod commands;
mod linker;
mod paths;
mod prompt;
mod repo;
mod skills;
mod state;
mod ui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skillrack")]
#[command(about = "Install and manage curated Claude Code skills")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive install: choose scope and skills
    Install,
    /// Update installed skills and discover new ones
    Update,
    /// Show installed and available skills
    List,
    /// Show metadata from the last install
    Version,
    /// Remove all managed skills and local data
    Uninstall,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and --version land here too; only real parse errors
            // should exit non-zero.
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Install) {
        Commands::Install => commands::install::run(),
        Commands::Update => commands::update::run(),
        Commands::List => commands::list::run(),
        Commands::Version => commands::version::run(),
        Commands::Uninstall => commands::uninstall::run(),
    };

    if let Err(err) = result {
        ui::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
