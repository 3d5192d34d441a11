//! inertia-test: test requests and conformance fixtures
//!
//! Provides a plain in-memory request and an instrumented serializer for
//! exercising the renderer without an HTTP stack.
//!
//! # Example
//!
//! ```
//! use inertia_test::prelude::*;
//!
//! let request = TestRequest::get()
//!     .with_header("X-Inertia", "true")
//!     .with_header("X-Inertia-Partial-Data", "user");
//!
//! assert!(request.is_inertia());
//! assert_eq!(request.header("x-inertia-partial-data"), Some("user"));
//! ```

use inertia::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Test request: a method and a case-insensitive header map.
#[derive(Debug, Clone, Default)]
pub struct TestRequest {
    method: String,
    headers: HashMap<String, String>,
}

impl TestRequest {
    /// Create a request with the given method and no headers.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: HashMap::new(),
        }
    }

    /// Shorthand for `TestRequest::new("GET")`.
    #[must_use]
    pub fn get() -> Self {
        Self::new("GET")
    }

    /// Add a header (builder pattern). Names are stored lowercased.
    #[must_use]
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }
}

impl InertiaRequest for TestRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Serializer wrapper that counts how often it is invoked.
///
/// Clones share the counter, so keep one clone and hand the other to the
/// renderer.
#[derive(Debug, Clone, Default)]
pub struct CountingSerializer<S> {
    inner: S,
    calls: Arc<AtomicUsize>,
}

impl<S: PageObjectSerializer> CountingSerializer<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `serialize` calls so far, across all clones.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S: PageObjectSerializer> PageObjectSerializer for CountingSerializer<S> {
    fn serialize(
        &self,
        page: &PageObject,
        only: Option<&[String]>,
    ) -> Result<String, SerializationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.serialize(page, only)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{CountingSerializer, TestRequest};
    pub use inertia::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = TestRequest::new("patch")
            .with_header("X-Inertia-Version", "1")
            .with_header("x-inertia", "TRUE");

        assert_eq!(request.method(), "patch");
        assert_eq!(request.header("x-inertia-version"), Some("1"));
        assert_eq!(request.header("X-INERTIA-VERSION"), Some("1"));
        assert_eq!(request.header("missing"), None);
        assert!(request.is_inertia());
        assert!(request.is_put_patch_delete());
        assert!(!request.is_get());
    }

    #[test]
    fn test_later_header_replaces_earlier() {
        let request = TestRequest::get()
            .with_header("X-Inertia-Version", "1")
            .with_header("x-inertia-version", "2");
        assert_eq!(request.header("X-Inertia-Version"), Some("2"));
    }

    #[test]
    fn test_counting_serializer_shares_count() {
        let counter = CountingSerializer::new(JsonPageObjectSerializer);
        let renderer = Renderer::new(
            counter.clone(),
            SimpleTemplateRenderer::new("@PageObject@"),
            StaticVersion::new("1"),
        );

        renderer
            .render(&TestRequest::get(), &RenderOptions::new("Home", "/"))
            .unwrap();
        renderer
            .render(
                &TestRequest::get().with_header("X-Inertia-Version", "2"),
                &RenderOptions::new("Home", "/"),
            )
            .unwrap();

        assert_eq!(counter.calls(), 1);
    }
}
