//! User-facing diagnostics: fixed `[Info]` / `[Error]` prefixes on stdout.
//!
//! Stdout carries both diagnostics and the final JSON document; only the
//! JSON goes out unprefixed. Messages are mirrored into tracing so the log
//! file tells the same story.

use std::fmt::Display;

/// Prints `[Info] <msg>` to stdout.
pub fn info(msg: impl Display) {
    println!("[Info] {msg}");
    tracing::info!("{}", msg);
}

/// Prints `[Error] <msg>` to stdout.
pub fn error(msg: impl Display) {
    println!("[Error] {msg}");
    tracing::error!("{}", msg);
}
