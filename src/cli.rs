use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "vitalmap")]
#[command(about = "Patient vital-sign screening and risk assessment", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single patient record from a JSON file
    Analyze {
        /// Path to a JSON patient record (omit with --sample)
        record: Option<PathBuf>,

        /// Analyze the built-in sample record instead of a file
        #[arg(long)]
        sample: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip classifier training; report rules only
        #[arg(long = "no-classifier")]
        no_classifier: bool,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Start the JSON API server
    Serve {
        /// Bind address (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip classifier training at startup
        #[arg(long = "no-classifier")]
        no_classifier: bool,
    },

    /// Start the HTML portal with patient history persistence
    Portal {
        /// Bind address (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite connection string (overrides configuration)
        #[arg(long)]
        database: Option<String>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
