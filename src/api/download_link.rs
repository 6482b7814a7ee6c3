// src/api/download_link.rs
// =============================================================================
// Resolves exam-list entries to download links through the download service.
//
// Request:
//   GET <base>/api/v1/pdaotao/scraping/examlist/<id>
//
// The id is put into the path exactly as given. It is not escaped or checked,
// so whatever the caller passes is what the service sees.
//
// fetch_download_links runs many lookups at once. Every id gets its own
// request (no deduplication) and its own result, successful or not.
// =============================================================================

use super::client::get_json;
use super::EXAM_LIST_PATH;
use crate::error::Result;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Outcome of one lookup in a batch
#[derive(Debug, Clone, Serialize)]
pub struct DownloadLinkResult {
    /// The id that was looked up
    pub id: String,
    /// The link JSON or the error message
    #[serde(flatten)]
    pub outcome: LinkOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkOutcome {
    Link(Value),
    Error(String),
}

impl DownloadLinkResult {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, LinkOutcome::Link(_))
    }
}

/// Fetches the download link for one exam-list entry, returning the JSON body unchanged
pub async fn fetch_download_link(client: &Client, base: &str, id: &str) -> Result<Value> {
    get_json(client, download_link_url(base, id)).await
}

// Looks up many ids concurrently
//
// Parameters:
//   ids: entry ids, duplicates included
//   concurrency: how many requests may be in flight at once (0 is treated as 1)
//
// Returns: one result per id, in the order the ids were given
pub async fn fetch_download_links(
    client: &Client,
    base: &str,
    ids: Vec<String>,
    concurrency: usize,
) -> Vec<DownloadLinkResult> {
    let lookups = ids.into_iter().map(|id| {
        let client = client.clone();
        let url = download_link_url(base, &id);
        async move {
            let outcome = match get_json(&client, url).await {
                Ok(link) => LinkOutcome::Link(link),
                Err(e) => {
                    warn!(%id, url = e.url().unwrap_or_default(), error = %e, "download link lookup failed");
                    LinkOutcome::Error(e.to_string())
                }
            };
            DownloadLinkResult { id, outcome }
        }
    });

    // buffered (not buffer_unordered) keeps results in input order
    stream::iter(lookups)
        .buffered(concurrency.max(1))
        .collect()
        .await
}

fn download_link_url(base: &str, id: &str) -> String {
    format!("{}{}/{}", base, EXAM_LIST_PATH, id)
}
