//! Fixed route table
//!
//! Maps a handful of exact paths to canned plaintext responses. Every other
//! path falls through to the default entry.

/// A fully predetermined response: status, headers, body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: Option<&'static str>,
    /// Additional header pair sent beyond the standard ones
    pub extra_header: Option<(&'static str, &'static str)>,
    pub body: &'static str,
}

/// A single route table entry, matched by exact path comparison
#[derive(Debug, Clone, Copy)]
pub struct FixedRoute {
    pub path: &'static str,
    pub response: CannedResponse,
}

const PLAIN_TEXT: &str = "text/plain";
const TAG_HEADER: (&str, &str) = ("X-ZeroMQ", "a_header_value");

/// Routes recognized by exact, case-sensitive path match
pub const ROUTES: &[FixedRoute] = &[
    FixedRoute {
        path: "/unknown",
        response: CannedResponse {
            status: 404,
            content_type: None,
            extra_header: None,
            body: "",
        },
    },
    FixedRoute {
        path: "/zeromq",
        response: CannedResponse {
            status: 200,
            content_type: Some(PLAIN_TEXT),
            extra_header: Some(TAG_HEADER),
            body: "it is fun to play with ZeroMQ",
        },
    },
    FixedRoute {
        path: "/netty",
        response: CannedResponse {
            status: 200,
            content_type: Some(PLAIN_TEXT),
            extra_header: Some(TAG_HEADER),
            body: "it is also fun to play with Netty",
        },
    },
];

/// Fallthrough for every path not present in `ROUTES`
pub const DEFAULT_RESPONSE: CannedResponse = CannedResponse {
    status: 200,
    content_type: Some(PLAIN_TEXT),
    extra_header: None,
    body: "Hello World",
};

/// Look up the response for a request path.
///
/// Matching is exact and case-sensitive; the query string is not part of the
/// path and never participates. The HTTP method does not either.
pub fn match_route(path: &str) -> &'static CannedResponse {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map_or(&DEFAULT_RESPONSE, |route| &route.response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_404_with_empty_body() {
        let canned = match_route("/unknown");
        assert_eq!(canned.status, 404);
        assert!(canned.body.is_empty());
        assert_eq!(canned.content_type, None);
        assert_eq!(canned.extra_header, None);
    }

    #[test]
    fn test_zeromq_route() {
        let canned = match_route("/zeromq");
        assert_eq!(canned.status, 200);
        assert_eq!(canned.body, "it is fun to play with ZeroMQ");
        assert_eq!(canned.body.len(), 29);
        assert_eq!(canned.content_type, Some("text/plain"));
        assert_eq!(canned.extra_header, Some(("X-ZeroMQ", "a_header_value")));
    }

    #[test]
    fn test_netty_route() {
        let canned = match_route("/netty");
        assert_eq!(canned.status, 200);
        assert_eq!(canned.body, "it is also fun to play with Netty");
        assert_eq!(canned.body.len(), 33);
        assert_eq!(canned.extra_header, Some(("X-ZeroMQ", "a_header_value")));
    }

    #[test]
    fn test_unmatched_paths_fall_through() {
        for path in ["/", "/hello", "/zeromq2", "/netty/extra", "/index.html"] {
            let canned = match_route(path);
            assert_eq!(canned.status, 200, "path {path} should use the default");
            assert_eq!(canned.body, "Hello World");
            assert_eq!(canned.content_type, Some("text/plain"));
            assert_eq!(canned.extra_header, None);
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(*match_route("/ZEROMQ"), DEFAULT_RESPONSE);
        assert_eq!(*match_route("/Unknown"), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_match_is_exact_not_prefix() {
        assert_eq!(*match_route("/zeromq/"), DEFAULT_RESPONSE);
        assert_eq!(*match_route("/unknownx"), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        assert_eq!(*match_route("/netty"), *match_route("/netty"));
        assert_eq!(*match_route("/whatever"), *match_route("/whatever"));
    }
}
