//! `HttpMessage` — Indexed view over an `http` crate request.
//!
//! Provides O(1) header lookups by pre-indexing the request's headers at
//! construction time. `http::HeaderMap` is already case-insensitive, but its
//! values are bytes; `HttpMessage` keeps the UTF-8 ones as `&str`-ready strings
//! so the renderer can borrow them for the lifetime of the call.

use std::collections::HashMap;

use http::request::Parts;
use http::{HeaderMap, Method, Request, Uri};
use inertia::InertiaRequest;

/// Indexed view over HTTP request data for rendering.
///
/// Built from an `http::Request<B>` or its `Parts`, copying the method, the
/// path-and-query of the URI, and all headers with lowercased names.
///
/// Header values that are not valid UTF-8 are skipped. When a header repeats,
/// the first value wins.
///
/// # Example
///
/// ```
/// use inertia::InertiaRequest;
/// use inertia_http::HttpMessage;
///
/// let request = http::Request::get("/users?page=2")
///     .header("X-Inertia", "true")
///     .body(())
///     .unwrap();
///
/// let msg = HttpMessage::from(&request);
/// assert_eq!(msg.method(), "GET");
/// assert_eq!(msg.uri(), "/users?page=2");
/// assert!(msg.is_inertia());
/// ```
#[derive(Debug, Clone)]
pub struct HttpMessage {
    /// All headers indexed by lowercased name.
    headers: HashMap<String, String>,
    /// Path and query of the request URI.
    uri: String,
    /// HTTP method.
    method: String,
}

impl HttpMessage {
    /// Get the request path with its query string.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl InertiaRequest for HttpMessage {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Borrowing conversion: clones method, URI and header strings.
impl<B> From<&Request<B>> for HttpMessage {
    fn from(req: &Request<B>) -> Self {
        from_parts(req.method(), req.uri(), req.headers())
    }
}

/// Borrowing conversion for extractors that only see `Parts`.
impl From<&Parts> for HttpMessage {
    fn from(parts: &Parts) -> Self {
        from_parts(&parts.method, &parts.uri, &parts.headers)
    }
}

/// Shared construction logic.
fn from_parts(method: &Method, uri: &Uri, header_map: &HeaderMap) -> HttpMessage {
    let mut headers = HashMap::with_capacity(header_map.keys_len());

    for (name, value) in header_map {
        match value.to_str() {
            // HeaderName is always lowercase
            Ok(value) => {
                headers
                    .entry(name.as_str().to_owned())
                    .or_insert_with(|| value.to_owned());
            }
            Err(_) => {
                tracing::debug!(header = %name, "skipping non-UTF-8 header value");
            }
        }
    }

    let uri = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned());

    HttpMessage {
        headers,
        uri,
        method: method.as_str().to_owned(),
    }
}
