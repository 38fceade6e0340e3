//! CLI argument definitions using clap
//!
//! Commands:
//! - cluedex identify [--config path] [--catalog url|path] [--lang tag]
//! - cluedex filter [--present key]... [--absent key]... [--catalog ...]
//! - cluedex clues [--catalog ...]
//! - cluedex validate [--catalog ...]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// cluedex - narrow a suspect catalog by marking clues
#[derive(Parser, Debug)]
#[command(name = "cluedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog location: an http(s) URL or a local path
    #[arg(long)]
    pub catalog: Option<String>,

    /// Explicit locale override tag (e.g. "fr-CA")
    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive deduction session
    Identify {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// One-shot: apply marks, print the matched suspects, exit
    Filter {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Mark a clue present (repeatable)
        #[arg(long = "present", value_name = "KEY")]
        present: Vec<String>,

        /// Mark a clue absent (repeatable)
        #[arg(long = "absent", value_name = "KEY")]
        absent: Vec<String>,
    },

    /// Print the ordered clue list with localized names
    Clues {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Parse the catalog strictly and report its shape
    Validate {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
