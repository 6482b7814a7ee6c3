// src/main.rs
// =============================================================================
// Entry point of the examlist-fetch CLI.
//
// What happens here:
// 1. Load .env so the VITE_* service settings can live next to the frontend's
// 2. Parse command-line arguments (flags fall back to environment variables)
// 3. Set up logging and the credentialed HTTP client
// 4. Dispatch to the subcommand and print the JSON it produced
// 5. Exit with a code (0 = success, 1 = some batch lookups failed, 2 = error)
// =============================================================================

mod api;
mod cli;
mod config;
mod error;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use tracing::{debug, info};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = everything fetched
//   Ok(1) = a batch ran but at least one lookup failed
//   Err   = configuration, network or parse failure
async fn run() -> Result<i32> {
    // A missing .env is fine; real environment variables still apply
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Some(cache) = &cli.services.cache_service {
        debug!(%cache, "cache service configured (unused)");
    }

    let client = api::build_client(&cli.services, &cli.client)?;

    match cli.command {
        Commands::ExamList { total, compact } => {
            let base = cli.services.examlist_base()?;
            let exams = api::fetch_exam_list(&client, base, total).await?;
            print_json(&exams, compact)?;
            Ok(0)
        }
        Commands::DownloadLink { id, compact } => {
            let base = cli.services.download_base()?;
            let link = api::fetch_download_link(&client, base, &id).await?;
            print_json(&link, compact)?;
            Ok(0)
        }
        Commands::DownloadLinks { ids, concurrency, compact } => {
            let base = cli.services.download_base()?;
            let results: Vec<api::DownloadLinkResult> =
                api::fetch_download_links(&client, base, ids, concurrency).await;
            print_json(&results, compact)?;

            let failed = results.iter().filter(|r| !r.is_ok()).count();
            info!(total = results.len(), failed, "download link lookups finished");

            Ok(if failed > 0 { 1 } else { 0 })
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    let output = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", output);
    Ok(())
}
