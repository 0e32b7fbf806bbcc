//! HTTP response building module
//!
//! Turns a route table entry into a wire-ready response, decoupled from how
//! the entry was chosen.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::routing::CannedResponse;

/// Build the response described by a route table entry.
///
/// `Content-Length` is always set to the exact byte length of the body;
/// `Content-Type` and the extra header pair are set when the entry carries
/// them.
pub fn build_canned_response(canned: &CannedResponse) -> Response<Full<Bytes>> {
    let body = Bytes::from_static(canned.body.as_bytes());

    let mut builder = Response::builder()
        .status(canned.status)
        .header("Content-Length", body.len());

    if let Some(content_type) = canned.content_type {
        builder = builder.header("Content-Type", content_type);
    }

    if let Some((name, value)) = canned.extra_header {
        builder = builder.header(name, value);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error(canned.status, &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::match_route;

    fn header<'a>(resp: &'a Response<Full<Bytes>>, name: &str) -> Option<&'a str> {
        resp.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_content_length_matches_body_bytes() {
        for (path, expected) in [("/zeromq", "29"), ("/netty", "33"), ("/other", "11")] {
            let resp = build_canned_response(match_route(path));
            assert_eq!(header(&resp, "content-length"), Some(expected));
        }
    }

    #[test]
    fn test_zeromq_response_headers() {
        let resp = build_canned_response(match_route("/zeromq"));
        assert_eq!(resp.status(), 200);
        assert_eq!(header(&resp, "content-type"), Some("text/plain"));
        assert_eq!(header(&resp, "x-zeromq"), Some("a_header_value"));
    }

    #[test]
    fn test_404_response_is_bare() {
        let resp = build_canned_response(match_route("/unknown"));
        assert_eq!(resp.status(), 404);
        assert_eq!(header(&resp, "content-length"), Some("0"));
        assert!(resp.headers().get("content-type").is_none());
        assert!(resp.headers().get("x-zeromq").is_none());
    }

    #[test]
    fn test_default_response_has_no_extra_header() {
        let resp = build_canned_response(match_route("/anything"));
        assert_eq!(resp.status(), 200);
        assert_eq!(header(&resp, "content-type"), Some("text/plain"));
        assert!(resp.headers().get("x-zeromq").is_none());
    }
}
