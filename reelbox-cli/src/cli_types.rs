//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reelbox")]
#[command(about = "Keep track of the movies you have seen", long_about = None)]
pub(crate) struct Cli {
    /// Movie database file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Website template (defaults to _static/index_template.html, then a built-in page)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Directory the generated website is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Type in year and rating yourself instead of looking them up on OMDb
    #[arg(long)]
    pub manual: bool,

    /// OMDb API key (overrides $OMDB_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List registered users
    Users,

    /// Manage the OMDb API key configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the API key and where it comes from
    Show,

    /// Save an API key to the config file
    SetKey {
        /// The OMDb API key
        key: String,
    },

    /// Print the config file path
    Path,
}
