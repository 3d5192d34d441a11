//! inertia-http: HTTP adapter for the inertia renderer
//!
//! This crate provides two layers:
//!
//! 1. **`http` crate bridge**: [`HttpMessage`] reads an `http::Request`,
//!    [`InertiaResponse`] writes an `http::Response`
//! 2. **axum integration** (feature `axum`): an [`Inertia`](axum::Inertia)
//!    extractor backed by a shared renderer
//!
//! # Architecture
//!
//! ```text
//! http::Request ──From──▶ HttpMessage (InertiaRequest)
//!                               ↓ Renderer::render()
//!                          HttpResponse
//!                               ↓ InertiaResponse::into_http()
//!                        http::Response<String>
//! ```
//!
//! # Example
//!
//! ```
//! use inertia::{RenderOptions, Renderer, SimpleTemplateRenderer};
//! use inertia_http::{HttpMessage, InertiaResponse};
//!
//! let renderer = Renderer::builder()
//!     .template_renderer(SimpleTemplateRenderer::new("@PageObject@"))
//!     .version("1")
//!     .build()
//!     .unwrap();
//!
//! let request = http::Request::get("/users")
//!     .header("X-Inertia", "true")
//!     .body(())
//!     .unwrap();
//! let msg = HttpMessage::from(&request);
//!
//! let response = renderer.render(&msg, &RenderOptions::new("Users/Index", msg.uri())).unwrap();
//! let response = InertiaResponse::from(response).into_http().unwrap();
//! assert_eq!(response.headers()["x-inertia"], "true");
//! ```

mod message;
mod response;
mod simple;

#[cfg(feature = "axum")]
pub mod axum;

pub use message::HttpMessage;
pub use response::InertiaResponse;
pub use simple::{HttpRequest, HttpRequestBuilder};

use inertia::SerializationError;

/// Errors raised while turning a render into an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page object could not be serialized.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The response could not be represented as an `http::Response`.
    #[error("invalid response: {0}")]
    Response(#[from] http::Error),
}

/// Prelude for convenient imports.
pub mod prelude {
    #[cfg(feature = "axum")]
    pub use super::axum::{Inertia, InertiaState};
    pub use super::{
        // Errors
        Error,
        // Request views
        HttpMessage,
        // Simple request (for testing)
        HttpRequest,
        HttpRequestBuilder,
        // Responses
        InertiaResponse,
    };
    pub use inertia::prelude::*;
}
