//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pobgen")]
#[command(about = "Path of Exile character to Path of Building converter", long_about = None)]
pub struct Cli {
    /// Log per-item progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a character into an import code
    #[command(visible_alias = "e")]
    Export {
        /// Character items JSON (get-items response)
        items: PathBuf,

        /// Passive tree JSON (get-passive-skills response)
        tree: PathBuf,

        /// Translation dictionary (uses configured default if not provided)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Write the code to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode an import code back into document XML
    #[command(visible_alias = "d")]
    Decode {
        /// Import code, or "-" to read it from stdin
        code: String,
    },

    /// Print the passive tree URL only
    #[command(visible_alias = "t")]
    Tree {
        /// Character items JSON (get-items response)
        items: PathBuf,

        /// Passive tree JSON (get-passive-skills response)
        tree: PathBuf,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default translation dictionary
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Set default target game version (e.g. 3_0)
        #[arg(long)]
        target_version: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
