//! iTunes Lookup API client.
//!
//! Uses the curl crate (libcurl) to issue a single blocking GET against the
//! public lookup endpoint and parses the JSON body into an untyped value.

use anyhow::{Context, Result};
use serde_json::Value;

/// Public metadata endpoint for App Store track identifiers.
pub const LOOKUP_ENDPOINT: &str = "https://itunes.apple.com/lookup";

/// Builds the request URL: `<endpoint>?id=<track_id>`.
pub fn request_url(endpoint: &str, track_id: &str) -> Result<url::Url> {
    let mut url = url::Url::parse(endpoint)
        .with_context(|| format!("invalid lookup endpoint: {endpoint}"))?;
    url.query_pairs_mut().append_pair("id", track_id);
    Ok(url)
}

/// Fetches metadata for `track_id` from the public lookup API.
///
/// `track_id` is assumed non-empty; the extractor guarantees that.
pub fn fetch(track_id: &str) -> Result<Value> {
    fetch_at(LOOKUP_ENDPOINT, track_id)
}

/// Like [`fetch`] but against a custom endpoint (integration tests point
/// this at a local stub server).
///
/// Success means HTTP 200 with a JSON body. Redirects are not followed;
/// any other status is an error response. No timeout is set.
pub fn fetch_at(endpoint: &str, track_id: &str) -> Result<Value> {
    let url = request_url(endpoint, track_id)?;
    tracing::info!("GET {}", url);

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str()).context("invalid lookup URL")?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("lookup request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if code != 200 {
        anyhow::bail!("lookup for id {} got error response: HTTP {}", track_id, code);
    }

    serde_json::from_slice(&body).context("lookup response is not valid JSON")
}
