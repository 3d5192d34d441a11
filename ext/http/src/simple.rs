//! Simple `HttpRequest` for testing and basic use cases.
//!
//! This is a lightweight request for when you don't have an `http::Request`.

use inertia::InertiaRequest;
use std::collections::HashMap;

/// Simple HTTP request for rendering.
///
/// Use this for testing or simple use cases. For requests coming from an
/// `http`-based server, use [`HttpMessage`](crate::HttpMessage) instead.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: String,
    path: String,
    headers: HashMap<String, String>,
}

impl Default for HttpRequest {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            headers: HashMap::new(),
        }
    }
}

impl HttpRequest {
    /// Create a builder for `HttpRequest`. Defaults to `GET /`.
    #[must_use]
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    /// Get the request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl InertiaRequest for HttpRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Builder for `HttpRequest`.
#[derive(Debug, Default)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    /// Set the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.request.method = method.into();
        self
    }

    /// Set the request path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.request.path = path.into();
        self
    }

    /// Add a header (name is lowercased for case-insensitive lookup).
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .headers
            .insert(name.into().to_lowercase(), value.into());
        self
    }

    /// Mark the request as an Inertia visit (`X-Inertia: true`).
    #[must_use]
    pub fn inertia(self) -> Self {
        self.header(inertia::headers::X_INERTIA, "true")
    }

    /// Build the `HttpRequest`.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        self.request
    }
}
