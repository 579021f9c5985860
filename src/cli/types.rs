use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "s4a-dict")]
#[command(about = "Attribute dictionary reconciliation CLI", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Project root (default: nearest ancestor with data/ or dictionary.toml)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report attribute names used by objects or views but never defined
    Analyze {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create draft records for every missing attribute
    Scaffold {
        /// Show what would be created without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Fill auto-generated records with inferred schema details
    Populate {
        /// Show what would be updated without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate static-site content pages from the data corpus
    Generate,

    /// Report duplicate, missing and malformed identifiers and names
    Check,

    /// Print a shell completion script
    Completions {
        /// Target shell (bash, zsh, fish)
        shell: String,
    },
}
