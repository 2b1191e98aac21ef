//! CLI argument parsing for arbor
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use arbor_core::error::ArborError;
use arbor_core::format::OutputFormat;

/// Arbor - weighted-graph toolkit CLI
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ARBOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random graph
    Gen {
        /// Seed for the random number generator
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Number of vertices
        #[arg(long, short = 'n')]
        vertices: usize,

        /// Percentage of potential edges which are present (1-100)
        #[arg(long, short, default_value_t = 50)]
        density: u8,

        /// Maximum edge weight (minimum is 1)
        #[arg(long, short = 'w', default_value_t = 9)]
        max_weight: u64,

        /// Write the graph to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Show totals and connectivity for a graph file
    Info {
        /// Graph file in matrix format
        file: PathBuf,
    },

    /// Compute a minimum spanning tree of a graph file
    Mst {
        /// Graph file in matrix format
        file: PathBuf,

        /// Write the tree in matrix format to a file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Check whether one graph file is a spanning tree of another
    Check {
        /// Candidate tree file in matrix format
        tree: PathBuf,

        /// Graph file in matrix format
        graph: PathBuf,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, ArborError> {
    s.parse()
}
