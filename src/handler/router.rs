//! Request dispatch module
//!
//! Entry point for HTTP request processing: protocol edge cases, route table
//! lookup, and access logging. A pure function over the parsed request — the
//! only side effects are log lines.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, Version};

use crate::config::Config;
use crate::http;
use crate::logger;
use crate::routing;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    cfg: Arc<Config>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version()).to_string();
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    logger::log_headers_count(req.headers().len(), cfg.logging.show_headers);

    // hyper writes the interim 100 Continue once the request body is first
    // polled, so an Expect: 100-continue request has its body drained before
    // the final response is produced.
    if expects_continue(&req) {
        if let Err(e) = req.into_body().collect().await {
            logger::log_warning(&format!("Failed to drain request body: {e}"));
        }
    }

    let canned = routing::match_route(&path);
    let response = http::build_canned_response(canned);

    if cfg.logging.access_log {
        let mut entry = logger::AccessLogEntry::new(peer_addr.to_string(), method, path);
        entry.query = query;
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = canned.body.len();
        entry.referer = referer;
        entry.user_agent = user_agent;
        logger::log_access(&entry, &cfg.logging.access_log_format);
    }

    Ok(response)
}

/// Whether the request asks for an interim 100 Continue before sending its body
fn expects_continue<B>(req: &Request<B>) -> bool {
    req.headers()
        .get(hyper::header::EXPECT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("100-continue"))
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_expect(value: Option<&str>) -> Request<()> {
        let mut builder = Request::builder().uri("/zeromq");
        if let Some(v) = value {
            builder = builder.header("Expect", v);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn test_expects_continue_detection() {
        assert!(expects_continue(&request_with_expect(Some("100-continue"))));
        // Header value comparison is case-insensitive per RFC 9110
        assert!(expects_continue(&request_with_expect(Some("100-Continue"))));
        assert!(!expects_continue(&request_with_expect(Some("other"))));
        assert!(!expects_continue(&request_with_expect(None)));
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }

    #[test]
    fn test_header_value_extraction() {
        let req = Request::builder()
            .uri("/")
            .header("User-Agent", "curl/8.0")
            .body(())
            .unwrap();
        assert_eq!(header_value(&req, "user-agent"), Some("curl/8.0".to_string()));
        assert_eq!(header_value(&req, "referer"), None);
    }
}
