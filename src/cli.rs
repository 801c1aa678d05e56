//! CLI argument parsing for the scorecard tool.
//!
//! Global flags: --store, --verbose. Subcommands cover survey lifecycle
//! (init, submit, generate), reporting, CSV export, and listing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Core 4 developer-experience survey scoring CLI
#[derive(Parser, Debug)]
#[command(name = "core4-scorecard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Survey store directory
    #[arg(long, global = true, default_value = ".core4")]
    pub store: PathBuf,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new survey for a team
    Init {
        /// Team the survey belongs to
        #[arg(long)]
        team: String,
    },

    /// Submit one response to a survey
    Submit {
        /// Survey identifier
        #[arg(long)]
        survey: String,

        /// Answer as KEY=VALUE, repeatable, one per question
        #[arg(long = "rate", value_name = "KEY=VALUE")]
        rate: Vec<String>,
    },

    /// Generate random valid responses for a survey
    Generate {
        /// Survey identifier
        #[arg(long)]
        survey: String,

        /// Number of responses to generate
        #[arg(long, default_value_t = 10)]
        count: u32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render the scorecard for a survey
    Report {
        /// Survey identifier
        #[arg(long)]
        survey: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Export raw responses as CSV
    Export {
        /// Survey identifier
        #[arg(long)]
        survey: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List surveys in the store
    List,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}
