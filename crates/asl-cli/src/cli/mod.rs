//! CLI for the ASL App Store lookup tool.

mod lookup;
pub mod report;

use anyhow::Result;
use clap::Parser;

/// Top-level CLI: one App Store URL in, one JSON document out.
#[derive(Debug, Parser)]
#[command(name = "asl")]
#[command(version)]
#[command(about = "ASL: App Store metadata lookup for the command line", long_about = None)]
pub struct Cli {
    /// App Store web URL, e.g. https://apps.apple.com/us/app/<name>/id<digits>
    pub url: Option<String>,
}

pub fn run_from_args() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    // The URL is optional at the clap level so a missing argument exits 1
    // through the normal error path instead of clap's usage error.
    let url = match cli.url {
        Some(url) => url,
        None => anyhow::bail!(
            "no URL given; pass an App Store link like https://apps.apple.com/us/app/<name>/id<digits>"
        ),
    };

    lookup::run_lookup(&url)
}
