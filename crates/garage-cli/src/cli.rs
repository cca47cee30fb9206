//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use garage_types::{ExportFormat, OutputFormat};

#[derive(Parser)]
#[command(name = "garage-cli")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Track vehicles through a service garage and export service records")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive console (default)
    Shell,

    /// Execute console commands from a file, one per line
    Run {
        /// Path to script file
        script: PathBuf,

        /// Stop at the first failing command
        #[arg(long)]
        fail_fast: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set format used when an export path has no extension
        #[arg(long)]
        set_export_format: Option<ExportFormat>,

        /// Set export directory
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
