//! App Store URL parsing and track identifier extraction.
//!
//! A valid link looks like `https://apps.apple.com/us/app/<name>/id<digits>`:
//! the identifier sits in the fifth `/`-separated path segment behind the
//! literal `id` tag.

use thiserror::Error;

/// Hostname all valid App Store links share.
pub const APP_STORE_HOST: &str = "apps.apple.com";

/// Literal tag preceding the track identifier in the URL path.
const TRACK_ID_PREFIX: &str = "id";

/// Why no track identifier could be extracted from the input string.
///
/// `MalformedUrl` is kept separate from the two "valid URL, wrong shape"
/// cases so callers can tell a broken input from a non-store link.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input was not a syntactically valid URL.
    #[error("malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),
    /// The URL parsed, but its host is not the App Store storefront.
    #[error("not an App Store URL (expected host apps.apple.com)")]
    WrongHost,
    /// Right host, but the path carries no id-prefixed segment.
    #[error("no track identifier in URL path")]
    NoTrackId,
}

/// Extracts the track identifier from an App Store web URL.
///
/// Only the first occurrence of the `id` tag is removed, so a segment like
/// `id12id34` yields `12id34`. An empty remainder counts as missing.
pub fn extract_track_id(raw: &str) -> Result<String, ExtractError> {
    let parsed = url::Url::parse(raw)?;

    if parsed.host_str() != Some(APP_STORE_HOST) {
        return Err(ExtractError::WrongHost);
    }

    // Index 4 counts the empty segment before the leading slash:
    // "/us/app/foo/id123" splits into ["", "us", "app", "foo", "id123"].
    let segment = match parsed.path().split('/').nth(4) {
        Some(s) if s.starts_with(TRACK_ID_PREFIX) => s,
        _ => return Err(ExtractError::NoTrackId),
    };

    let track_id = segment.replacen(TRACK_ID_PREFIX, "", 1);
    if track_id.is_empty() {
        return Err(ExtractError::NoTrackId);
    }
    Ok(track_id)
}
