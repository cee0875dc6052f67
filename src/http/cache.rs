//! Conditional request handling
//!
//! `Last-Modified` / `If-Modified-Since` support for static files.

use std::time::{SystemTime, UNIX_EPOCH};

/// Format a file's modification time as an HTTP date header value.
#[must_use]
pub fn format_last_modified(mtime: SystemTime) -> String {
    httpdate::fmt_http_date(mtime)
}

/// Check whether the client's `If-Modified-Since` header covers the file's
/// modification time (should return 304).
///
/// HTTP dates carry second granularity, so the comparison truncates the
/// filesystem timestamp to whole seconds.
#[must_use]
pub fn not_modified(if_modified_since: Option<&str>, mtime: SystemTime) -> bool {
    let Some(since) = if_modified_since.and_then(|v| httpdate::parse_http_date(v).ok()) else {
        return false;
    };
    match (
        mtime.duration_since(UNIX_EPOCH),
        since.duration_since(UNIX_EPOCH),
    ) {
        (Ok(file), Ok(header)) => file.as_secs() <= header.as_secs(),
        _ => false,
    }
}
