use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Downloads the Scryfall bulk data files, at most once a day.")]
pub struct Args {
    /// Read the configuration from FILE instead of the default location.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the bulk data files and the update log are saved to.
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<String>,

    /// Bulk data listing endpoint.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Don't ask for confirmation before downloading.
    #[arg(short, long)]
    pub yes: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download every bulk data file unless it was done within the last 24 hours (default).
    Sync,
    /// Show the available bulk data files without downloading them.
    List,
    /// Print the rulings from a downloaded rulings file.
    Rulings {
        /// Defaults to the rulings file in the save directory.
        path: Option<PathBuf>,
    },
}
