use anyhow::{Context, Result};
use clap::CommandFactory;
use s4a_dict::commands::{analyze, check, generate, populate, scaffold};
use s4a_dict::completions::{generate_completions, Shell};
use s4a_dict::config::{discover_root, Project};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let shell = Shell::from_str(shell)?;
        generate_completions(&mut Cli::command(), shell);
        return Ok(());
    }

    let root = resolve_root(cli.root)?;
    debug!(root = %root.display(), "project root");
    let project = Project::open(&root)?;

    match cli.command {
        Commands::Analyze { json } => analyze::execute(&project, json),
        Commands::Scaffold { dry_run } => scaffold::execute(&project, dry_run),
        Commands::Populate { dry_run } => populate::execute(&project, dry_run),
        Commands::Generate => generate::execute(&project),
        Commands::Check => check::execute(&project),
        Commands::Completions { .. } => Ok(()),
    }
}

fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(root) => Ok(root),
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Ok(discover_root(&cwd))
        }
    }
}
