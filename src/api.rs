//! Remote List Fetch
//!
//! Single best-effort GET against the configured endpoint. No retry, timeout or
//! cancellation.

use gloo_net::http::Request;

use crate::error::FetchError;
use crate::models::Item;

pub async fn fetch_todos(url: &str) -> Result<Vec<Item>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Vec<Item>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
