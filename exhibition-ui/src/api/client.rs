//! Content Fetch
//!
//! Retrieves `db.json` once per page load. Status and body go through the
//! same decoding as the native tools, so a 404 or a truncated file fails the
//! same way everywhere.

use gloo_net::http::Request;

use exhibition::content::{decode_response, lint, ContentError, ContentResult, Exhibition, CONTENT_URL};

/// Fetch and parse the content document
pub async fn fetch_exhibition() -> ContentResult<Exhibition> {
    let result = fetch_raw().await;

    match &result {
        Ok(doc) => {
            for warning in lint(doc) {
                web_sys::console::debug_1(&format!("db.json: {}", warning).into());
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Could not fetch content: {}", e).into());
        }
    }

    result
}

async fn fetch_raw() -> ContentResult<Exhibition> {
    let response = Request::get(CONTENT_URL)
        .send()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .binary()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;

    decode_response(status, &body)
}
