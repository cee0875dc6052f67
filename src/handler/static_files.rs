//! Static file serving module
//!
//! Maps decoded request paths onto the serving root and produces file,
//! directory-listing, redirect, or 404 responses.

use crate::config::ServerConfig;
use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Files served in place of a listing when present in a directory.
const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Serve the filesystem entry the request path resolves to.
pub async fn serve_path(ctx: &RequestContext<'_>, config: &ServerConfig) -> Response<Full<Bytes>> {
    let Some(resolved) = resolve_path(&config.root, ctx.path) else {
        return http::build_404_response();
    };

    let Ok(metadata) = fs::metadata(&resolved).await else {
        return http::build_404_response();
    };

    if metadata.is_dir() {
        // Redirect so relative links in the listing resolve correctly
        if !ctx.raw_path.ends_with('/') {
            return http::build_301_response(&format!("{}/", ctx.raw_path));
        }
        serve_directory(ctx, &resolved).await
    } else {
        serve_file(ctx, &resolved).await
    }
}

/// Resolve a decoded request path against the serving root.
///
/// Returns `None` when the path steps outside the root or does not exist.
/// Canonicalization also rejects symlinks escaping the root.
fn resolve_path(root: &Path, decoded_path: &str) -> Option<PathBuf> {
    let relative = decoded_path.trim_start_matches('/');

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => {
                logger::log_warning(&format!(
                    "Path traversal attempt blocked: {decoded_path}"
                ));
                return None;
            }
        }
    }

    // Nonexistent paths fail here, which is the common 404 case
    let canonical = root.join(relative).canonicalize().ok()?;

    if canonical.starts_with(root) {
        Some(canonical)
    } else {
        logger::log_warning(&format!(
            "Path escapes serving root: {} -> {}",
            decoded_path,
            canonical.display()
        ));
        None
    }
}

async fn serve_directory(ctx: &RequestContext<'_>, dir: &Path) -> Response<Full<Bytes>> {
    for index_file in INDEX_FILES {
        let index_path = dir.join(index_file);
        if fs::metadata(&index_path)
            .await
            .is_ok_and(|m| m.is_file())
        {
            return serve_file(ctx, &index_path).await;
        }
    }

    match listing::read_entries(dir).await {
        Ok(entries) => {
            let html = listing::render_listing(ctx.path, &entries);
            http::build_html_response(html, ctx.is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read directory '{}': {e}",
                dir.display()
            ));
            http::build_404_response()
        }
    }
}

async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    let modified = fs::metadata(path).await.ok().and_then(|m| m.modified().ok());
    let last_modified = modified.map(cache::format_last_modified);

    if let (Some(mtime), Some(lm)) = (modified, last_modified.as_deref()) {
        if cache::not_modified(ctx.if_modified_since.as_deref(), mtime) {
            return http::build_304_response(lm);
        }
    }

    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            return http::build_404_response();
        }
    };

    http::build_file_response(
        Bytes::from(content),
        mime::from_path(path),
        last_modified.as_deref(),
        ctx.is_head,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(path: &'a str, raw: &'a str) -> RequestContext<'a> {
        RequestContext {
            path,
            raw_path: raw,
            is_head: false,
            if_modified_since: None,
        }
    }

    fn test_root() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        std::fs::write(root.join("hello.txt"), b"hello world").unwrap();
        std::fs::create_dir(root.join("sub")).unwrap();
        std::fs::write(root.join("sub/inner.txt"), b"inner").unwrap();
        (tmp, root)
    }

    #[test]
    fn test_resolve_within_root() {
        let (_tmp, root) = test_root();
        assert_eq!(
            resolve_path(&root, "/hello.txt").unwrap(),
            root.join("hello.txt")
        );
        assert_eq!(resolve_path(&root, "/").unwrap(), root);
        assert_eq!(
            resolve_path(&root, "/sub/inner.txt").unwrap(),
            root.join("sub/inner.txt")
        );
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let (_tmp, root) = test_root();
        assert!(resolve_path(&root, "/../etc/passwd").is_none());
        assert!(resolve_path(&root, "/sub/../../outside").is_none());
    }

    #[test]
    fn test_resolve_missing_path() {
        let (_tmp, root) = test_root();
        assert!(resolve_path(&root, "/no-such-file").is_none());
    }

    #[tokio::test]
    async fn test_serve_file_and_missing() {
        let (_tmp, root) = test_root();
        let config = ServerConfig { port: 0, root };

        let resp = serve_path(&ctx("/hello.txt", "/hello.txt"), &config).await;
        assert_eq!(resp.status(), 200);

        let resp = serve_path(&ctx("/missing.txt", "/missing.txt"), &config).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_directory_redirect_and_listing() {
        let (_tmp, root) = test_root();
        let config = ServerConfig { port: 0, root };

        let resp = serve_path(&ctx("/sub", "/sub"), &config).await;
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/sub/");

        let resp = serve_path(&ctx("/sub/", "/sub/"), &config).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["Content-Type"],
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_index_file_served_instead_of_listing() {
        let (_tmp, root) = test_root();
        std::fs::write(root.join("sub/index.html"), b"<p>index</p>").unwrap();
        let config = ServerConfig { port: 0, root };

        let resp = serve_path(&ctx("/sub/", "/sub/"), &config).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "12");
    }
}
