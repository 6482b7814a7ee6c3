// src/api/test_server.rs
// Local stand-ins for the scraping services, bound to ephemeral ports.

use axum::http::{HeaderMap, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves `app` on 127.0.0.1 and returns its base URL, e.g. "http://127.0.0.1:41234"
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

/// Answers every request with the path, query and Cookie header it received
pub fn echo_router() -> Router {
    Router::new().fallback(echo)
}

async fn echo(uri: Uri, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "path": uri.path(),
        "query": uri.query(),
        "cookie": headers.get("cookie").and_then(|v| v.to_str().ok()),
    }))
}

/// A base URL nothing is listening on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
