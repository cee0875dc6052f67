//! Directory listing module
//!
//! Generates the HTML page enumerating a directory's immediate children,
//! and the sorted entry sample shown in the startup banner.
//!
//! Ordering is deliberate (OS enumeration order is unspecified):
//! directories first, then files, each group sorted by name.

use chrono::{DateTime, Local};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::Path;
use std::time::SystemTime;
use tokio::fs;

/// Characters percent-encoded in listing hrefs, beyond controls.
const HREF_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'&');

/// One immediate child of a listed directory.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Read and sort the immediate children of a directory.
pub async fn read_entries(dir: &Path) -> std::io::Result<Vec<ListingEntry>> {
    let mut entries = Vec::new();
    let mut reader = fs::read_dir(dir).await?;

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        // Unreadable children still appear in the listing, without metadata
        let metadata = entry.metadata().await.ok();
        let is_dir = metadata.as_ref().is_some_and(std::fs::Metadata::is_dir);
        entries.push(ListingEntry {
            name,
            is_dir,
            size: metadata.as_ref().map_or(0, std::fs::Metadata::len),
            modified: metadata.and_then(|m| m.modified().ok()),
        });
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Render the listing page for a directory.
///
/// `request_path` is the decoded request path, used for the page title and
/// to decide whether a parent link is shown (not at the root).
#[must_use]
pub fn render_listing(request_path: &str, entries: &[ListingEntry]) -> String {
    let title = escape_html(request_path);
    let mut rows = String::new();

    if request_path != "/" {
        rows.push_str("<tr><td><a href=\"../\">../</a></td><td></td><td></td></tr>\n");
    }

    for entry in entries {
        let display = if entry.is_dir {
            format!("{}/", escape_html(&entry.name))
        } else {
            escape_html(&entry.name)
        };
        let href = if entry.is_dir {
            format!("{}/", encode_href(&entry.name))
        } else {
            encode_href(&entry.name)
        };
        let size = if entry.is_dir {
            String::new()
        } else {
            entry.size.to_string()
        };
        let modified = entry.modified.map_or_else(String::new, format_modified);
        rows.push_str(&format!(
            "<tr><td><a href=\"{href}\">{display}</a></td><td>{size}</td><td>{modified}</td></tr>\n"
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Directory listing for {title}</title>
<style>
body {{ font-family: monospace; margin: 2em; }}
table {{ border-collapse: collapse; }}
td {{ padding: 0.2em 1.5em 0.2em 0; }}
</style>
</head>
<body>
<h1>Directory listing for {title}</h1>
<hr>
<table>
<tr><th align="left">Name</th><th align="left">Size</th><th align="left">Modified</th></tr>
{rows}</table>
<hr>
</body>
</html>
"#
    )
}

/// Collect up to `limit` entry names from a directory, sorted by name.
///
/// Used for the startup banner sample; read failures yield an empty sample
/// rather than aborting startup.
#[must_use]
pub fn sample_entries(root: &Path, limit: usize) -> Vec<String> {
    let Ok(reader) = std::fs::read_dir(root) else {
        return Vec::new();
    };
    let mut names: Vec<String> = reader
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names.truncate(limit);
    names
}

fn sort_entries(entries: &mut [ListingEntry]) {
    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.cmp(&b.name))
    });
}

fn format_modified(mtime: SystemTime) -> String {
    DateTime::<Local>::from(mtime)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn encode_href(name: &str) -> String {
    utf8_percent_encode(name, HREF_ENCODE).to_string()
}
