//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, path
//! decoding, and handoff to the static file handler.

use crate::config::ServerConfig;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use percent_encoding::percent_decode_str;
use std::convert::Infallible;
use std::sync::Arc;

/// Request context shared by the serving functions.
pub struct RequestContext<'a> {
    /// Percent-decoded request path.
    pub path: &'a str,
    /// Path exactly as the client sent it (used for redirect targets).
    pub raw_path: &'a str,
    pub is_head: bool,
    pub if_modified_since: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<ServerConfig>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let raw_path = req.uri().path();
    let is_head = *method == Method::HEAD;

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    let Ok(decoded) = percent_decode_str(raw_path).decode_utf8() else {
        logger::log_warning(&format!("Request path is not valid UTF-8: {raw_path}"));
        return Ok(http::build_404_response());
    };

    let ctx = RequestContext {
        path: decoded.as_ref(),
        raw_path,
        is_head,
        if_modified_since: req
            .headers()
            .get("if-modified-since")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    Ok(static_files::serve_path(&ctx, &config).await)
}

/// Reject everything except GET and HEAD with 405.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_head_allowed() {
        assert!(check_http_method(&Method::GET).is_none());
        assert!(check_http_method(&Method::HEAD).is_none());
    }

    #[test]
    fn test_other_methods_rejected() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS] {
            let resp = check_http_method(&method).unwrap();
            assert_eq!(resp.status(), 405);
        }
    }
}
