use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::settings::ServerSettings;

#[derive(Parser, Debug)]
#[command(author, version, about = "penalty shootout tracker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the dashboard API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = ServerSettings::default().default_port)]
        port: u16,
    },
    /// Replace the stored events with the rows of a CSV export
    Import {
        /// Path to the CSV file
        path: PathBuf,
    },
    /// Print leaderboards and the Hall of Fame
    Report {
        /// Restrict to one month, as YYYY-MM
        #[arg(short, long)]
        month: Option<String>,
        /// Restrict to male or female shooters
        #[arg(short, long)]
        gender: Option<String>,
    },
    /// Drop every stored event and recreate the schema
    Reset,
}
