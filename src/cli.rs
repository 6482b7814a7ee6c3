// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Shape:
//   examlist-fetch [GLOBAL OPTIONS] <COMMAND>
//
// Global options (service URLs, cookies, timeout, log level) live in
// config.rs and are flattened in here, so they can be given before or after
// the subcommand and fall back to environment variables.
// =============================================================================

use crate::config::{ClientConfig, ServiceConfig};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "examlist-fetch",
    version,
    about = "Fetch exam lists and exam download links from the scraping services",
    long_about = "examlist-fetch calls the exam list and download-link scraping services with \
                  credentialed GET requests and prints the JSON they return, unmodified."
)]
pub struct Cli {
    #[command(flatten)]
    pub services: ServiceConfig,

    #[command(flatten)]
    pub client: ClientConfig,

    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "EXAMLIST_LOG_LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the exam list
    ///
    /// Example: examlist-fetch exam-list --total
    ExamList {
        /// Ask the service for the total variant (sends ?total=true)
        #[arg(long)]
        total: bool,

        /// Print JSON on one line instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },

    /// Fetch the download link for one exam-list entry
    ///
    /// Example: examlist-fetch download-link abc123
    DownloadLink {
        /// Exam-list entry id, used verbatim in the request path
        id: String,

        /// Print JSON on one line instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },

    /// Fetch download links for several entries concurrently
    ///
    /// Example: examlist-fetch download-links abc123 def456 --concurrency 4
    DownloadLinks {
        /// Exam-list entry ids
        #[arg(required = true)]
        ids: Vec<String>,

        /// Maximum number of requests in flight
        #[arg(long, default_value_t = 8)]
        concurrency: usize,

        /// Print JSON on one line instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },
}
