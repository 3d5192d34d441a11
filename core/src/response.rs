//! `HttpResponse` — framework-neutral response descriptor produced by the renderer.

/// Status, headers and body of a protocol response.
///
/// Adapters copy this onto their native response type. Headers keep insertion
/// order; lookups by name ignore case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl HttpResponse {
    /// An empty response with the given status.
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a header (builder pattern). Repeated names are kept as separate entries.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// First value of the named header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Response body, if any. Conflict, redirect and location responses have none.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Split into owned parts for adapters.
    #[must_use]
    pub fn into_parts(self) -> (u16, Vec<(String, String)>, Option<String>) {
        (self.status, self.headers, self.body)
    }
}
