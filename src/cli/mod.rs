//! CLI argument parsing for compass
//!
//! Global flags choose the data tables, config file, output format and
//! logging; subcommands choose how commands are fed to the interpreter.

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use compass_core::format::OutputFormat;
use parse::parse_format;

/// Compass - campus route and schedule feasibility tool
#[derive(Parser, Debug)]
#[command(name = "compass")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ~/.config/compass/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding edges.csv and classes.csv
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Edge table (overrides --data-dir)
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Class catalog (overrides --data-dir)
    #[arg(long, global = true)]
    pub classes: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `compass_core::graph=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a command script: a count line followed by that many commands
    Run {
        /// Read the script from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Execute commands given as arguments, one command per argument
    Exec {
        #[arg(required = true, num_args = 1..)]
        commands: Vec<String>,
    },

    /// Load the data tables and report what was found
    Check,
}
