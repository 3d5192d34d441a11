//! inertia - server-side Inertia.js protocol for Rust
//!
//! Shapes responses for an Inertia single-page application: a full HTML
//! document on first load, a JSON page object on in-app visits, a `409` when
//! the client's assets are stale, and method-aware redirects.
//!
//! # Architecture
//!
//! The core is framework-neutral. Everything outside the protocol decision is
//! a capability passed in at construction:
//!
//! - [`InertiaRequest`]: method + header lookup over any request type
//! - [`PageObjectSerializer`]: page object → string ([`JsonPageObjectSerializer`] by default)
//! - [`TemplateRenderer`]: page JSON → HTML document ([`SimpleTemplateRenderer`] by default)
//! - [`VersionProvider`]: current asset version
//!
//! [`Renderer::render`] consumes a request and per-call [`RenderOptions`] and
//! returns an [`HttpResponse`] that the hosting framework writes out.
//!
//! # Key Design Insights
//!
//! 1. **No per-request state on the renderer**: history flags travel in
//!    [`RenderOptions`], so one `Renderer` serves concurrent requests.
//!
//! 2. **Conflicts short-circuit**: a stale `GET` gets its `409` before any
//!    page object is built or serialized.
//!
//! 3. **Partial reloads never mutate**: the prop filter is applied while
//!    serializing a borrowed page.
//!
//! # Example
//!
//! ```
//! use inertia::prelude::*;
//! use serde_json::json;
//!
//! struct Visit;
//!
//! impl InertiaRequest for Visit {
//!     fn method(&self) -> &str { "GET" }
//!     fn header(&self, name: &str) -> Option<&str> {
//!         match name.to_ascii_lowercase().as_str() {
//!             "x-inertia" => Some("true"),
//!             "x-inertia-partial-data" => Some("user"),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let renderer = Renderer::builder()
//!     .template_renderer(SimpleTemplateRenderer::new("<div id=\"app\" data-page='@PageObject@'></div>"))
//!     .version("1")
//!     .build()
//!     .unwrap();
//!
//! let mut props = Props::new();
//! props.insert("user".into(), json!({ "name": "Ada" }));
//! props.insert("stats".into(), json!([1, 2, 3]));
//!
//! let options = RenderOptions::new("Dashboard", "/dashboard").with_props(props);
//! let response = renderer.render(&Visit, &options).unwrap();
//!
//! assert_eq!(response.status(), 200);
//! assert_eq!(
//!     response.body(),
//!     Some(r#"{"component":"Dashboard","props":{"user":{"name":"Ada"}},"url":"/dashboard","version":"1","encryptHistory":false,"clearHistory":false}"#)
//! );
//! ```
//!
//! # Extensions
//!
//! - [`inertia-http`](https://docs.rs/inertia-http): `http` crate adapter and axum integration
//! - [`inertia-test`](https://docs.rs/inertia-test): protocol conformance fixtures (internal)

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod options;
mod page;
mod partial;
mod redirect;
mod renderer;
mod request;
mod response;
mod serializer;
mod template;
mod version;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use options::RenderOptions;
pub use page::{PageObject, Props};
pub use partial::{parse_partial_data, PartialReload};
pub use redirect::{location, redirect};
pub use renderer::{Renderer, RendererBuilder};
pub use request::InertiaRequest;
pub use response::HttpResponse;

// Capabilities
pub use serializer::PageObjectSerializer;
pub use template::{AttributeEscaping, SimpleTemplateRenderer, TemplateRenderer, PAGE_OBJECT_PLACEHOLDER};
pub use version::{StaticVersion, VersionProvider};

#[cfg(feature = "json")]
pub use serializer::JsonPageObjectSerializer;

// Config (feature-gated)
#[cfg(feature = "config")]
pub use config::InertiaConfig;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use inertia::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Capabilities
        AttributeEscaping,
        // Core types
        HttpResponse,
        // Errors
        InertiaError,
        InertiaRequest,
        PageObject,
        PageObjectSerializer,
        PartialReload,
        Props,
        RenderOptions,
        Renderer,
        RendererBuilder,
        SerializationError,
        SimpleTemplateRenderer,
        StaticVersion,
        TemplateError,
        TemplateRenderer,
        VersionProvider,
    };

    #[cfg(feature = "json")]
    pub use crate::JsonPageObjectSerializer;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Header names used by the protocol. Requests are read case-insensitively;
/// responses are written with this casing.
pub mod headers {
    /// Request: `"true"` asks for a JSON page object. Response: marks a JSON page object.
    pub const X_INERTIA: &str = "X-Inertia";
    /// Request: the client's asset version.
    pub const X_INERTIA_VERSION: &str = "X-Inertia-Version";
    /// Request: component to render instead of the one in the options.
    pub const X_INERTIA_PARTIAL_COMPONENT: &str = "X-Inertia-Partial-Component";
    /// Request: comma-separated prop keys to keep.
    pub const X_INERTIA_PARTIAL_DATA: &str = "X-Inertia-Partial-Data";
    /// Response: where the client should hard-visit on a `409`.
    pub const X_INERTIA_LOCATION: &str = "X-Inertia-Location";
    /// Response: `application/json` or `text/html`.
    pub const CONTENT_TYPE: &str = "Content-Type";
    /// Response: redirect target.
    pub const LOCATION: &str = "Location";
}

/// Template loaded when no template renderer or path is configured.
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/app.html";

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// The serializer could not encode a page object.
///
/// Raised per request. Encoding is a pure function of its input, so the
/// caller should report the failure rather than retry.
#[derive(Debug, thiserror::Error)]
#[error("failed to serialize page object: {source}")]
pub struct SerializationError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SerializationError {
    /// Wrap the encoder's error.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// The HTML template could not be loaded.
///
/// Raised while building a renderer, never while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Reading the template file failed.
    #[error("failed to read template at {}", .path.display())]
    Read {
        /// Path that was read.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors from renderer construction and configuration.
///
/// Everything except [`Serialization`](Self::Serialization) surfaces at
/// startup; fix the configuration and rebuild the renderer.
#[derive(Debug, thiserror::Error)]
pub enum InertiaError {
    /// A page object failed to serialize.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The HTML template could not be loaded.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A required capability has no implementation available.
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// A configuration file could not be read or parsed.
    #[error("invalid config \"{}\": {reason}", .path.display())]
    Config {
        /// Path of the configuration file.
        path: std::path::PathBuf,
        /// What went wrong.
        reason: String,
    },
}
