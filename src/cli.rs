use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fim", version, about = "File integrity monitoring client")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "FIM_API_BASE",
        help = "Scanning service base URL (overrides the config file)"
    )]
    pub api_base: Option<String>,
    #[arg(short, long, global = true, help = "Debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a fresh baseline of a folder's file hashes
    Init { folder: String },
    /// Compare a folder against its baseline
    Check {
        folder: String,
        #[arg(long, help = "Also write the results region as an HTML fragment")]
        html: Option<PathBuf>,
    },
    /// Probe whether the scanning service is reachable
    Health,
    /// Interactive console driving both workflows from stdin
    Session,
}
