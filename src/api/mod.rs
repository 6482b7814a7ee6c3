// src/api/mod.rs
// =============================================================================
// Clients for the two scraping services.
//
// Submodules:
// - client: builds the credentialed reqwest::Client and the shared GET helper
// - exam_list: the exam list endpoint (optionally with totals)
// - download_link: the per-entry download-link endpoint
//
// The fetchers share nothing but the Client handle they are given. Each call
// is independent and can run concurrently with any other.
// =============================================================================

mod client;
mod download_link;
mod exam_list;

#[cfg(test)]
mod test_server;

pub use client::build_client;
pub use download_link::{fetch_download_link, fetch_download_links, DownloadLinkResult};
pub use exam_list::fetch_exam_list;

/// Path shared by both services
pub const EXAM_LIST_PATH: &str = "/api/v1/pdaotao/scraping/examlist";
