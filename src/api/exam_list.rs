// src/api/exam_list.rs
// =============================================================================
// Fetches the exam list from the exam list service.
//
// Request:
//   GET <base>/api/v1/pdaotao/scraping/examlist
//   GET <base>/api/v1/pdaotao/scraping/examlist?total=true
//
// The total variant is only ever requested with total=true. When totals are
// not wanted the parameter is left out entirely; total=false is never sent.
// =============================================================================

use super::client::get_json;
use super::EXAM_LIST_PATH;
use crate::error::Result;
use reqwest::Client;
use serde_json::Value;

/// Fetches the exam list and returns the JSON body as the service sent it
pub async fn fetch_exam_list(client: &Client, base: &str, include_total: bool) -> Result<Value> {
    get_json(client, exam_list_url(base, include_total)).await
}

fn exam_list_url(base: &str, include_total: bool) -> String {
    let query = if include_total { "?total=true" } else { "" };
    format!("{}{}{}", base, EXAM_LIST_PATH, query)
}
