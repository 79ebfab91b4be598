//! `asl <url>` – extract the track identifier and query the lookup API.

use anyhow::{Context, Result};
use asl_core::{lookup, store_url};

use super::report;

pub fn run_lookup(raw_url: &str) -> Result<()> {
    let track_id = store_url::extract_track_id(raw_url)
        .with_context(|| format!("cannot extract a track identifier from {raw_url}"))?;
    report::info(format_args!("track id: {track_id}"));

    let result = lookup::fetch(&track_id)?;
    report::info("lookup finished");

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
