//! axum integration: an `Inertia` extractor bound to the current request.
//!
//! Install one shared renderer as an extension, then take [`Inertia`] in any
//! handler:
//!
//! ```no_run
//! use axum::{routing::get, Extension, Router};
//! use inertia::{Props, Renderer};
//! use inertia_http::axum::{Inertia, InertiaState};
//! use inertia_http::{Error, InertiaResponse};
//!
//! async fn dashboard(inertia: Inertia) -> Result<InertiaResponse, Error> {
//!     inertia.render("Dashboard", Props::new())
//! }
//!
//! let renderer = Renderer::builder().version("1").build().unwrap();
//! let app: Router = Router::new()
//!     .route("/dashboard", get(dashboard))
//!     .layer(Extension(InertiaState::new(renderer)));
//! ```

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::request::Parts;
use http::StatusCode;
use inertia::{Props, RenderOptions, Renderer};

use crate::{Error, HttpMessage, InertiaResponse};

/// Shared renderer plus app-wide render defaults, stored as a request extension.
#[derive(Debug, Clone)]
pub struct InertiaState {
    renderer: Arc<Renderer>,
    encrypt_history: bool,
}

impl InertiaState {
    /// Share `renderer` across all requests.
    #[must_use]
    pub fn new(renderer: Renderer) -> Self {
        Self::from_arc(Arc::new(renderer))
    }

    /// Use an already shared renderer.
    #[must_use]
    pub fn from_arc(renderer: Arc<Renderer>) -> Self {
        Self {
            renderer,
            encrypt_history: false,
        }
    }

    /// Default `encrypt_history` for [`Inertia::render`] (builder pattern).
    #[must_use]
    pub fn with_encrypt_history(mut self, encrypt_history: bool) -> Self {
        self.encrypt_history = encrypt_history;
        self
    }

    /// The shared renderer.
    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

/// Extractor giving a handler the renderer and a view of its own request.
#[derive(Debug, Clone)]
pub struct Inertia {
    state: InertiaState,
    request: HttpMessage,
}

impl<S> FromRequestParts<S> for Inertia
where
    S: Sync,
{
    type Rejection = (StatusCode, &'static str);

    /// Reads [`InertiaState`] from the request extensions.
    ///
    /// # Errors
    /// Returns [`StatusCode::INTERNAL_SERVER_ERROR`] if no `Extension<InertiaState>` layer is installed.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = parts.extensions.get::<InertiaState>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Inertia renderer was not installed",
        ))?;

        Ok(Self {
            state,
            request: HttpMessage::from(&*parts),
        })
    }
}

impl Inertia {
    /// Render `component` with `props`, at the request's own URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the page object cannot be serialized.
    pub fn render(
        &self,
        component: impl Into<String>,
        props: Props,
    ) -> Result<InertiaResponse, Error> {
        let options = RenderOptions {
            encrypt_history: self.state.encrypt_history,
            ..RenderOptions::new(component, self.request.uri())
        }
        .with_props(props);
        self.render_with(&options)
    }

    /// Render with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the page object cannot be serialized.
    pub fn render_with(&self, options: &RenderOptions) -> Result<InertiaResponse, Error> {
        Ok(self.state.renderer.render(&self.request, options)?.into())
    }

    /// Method-aware redirect to `location`.
    #[must_use]
    pub fn redirect(&self, location: &str) -> InertiaResponse {
        self.state.renderer.redirect(&self.request, location).into()
    }

    /// Hard visit to `url`.
    #[must_use]
    pub fn location(&self, url: &str) -> InertiaResponse {
        self.state.renderer.location(url).into()
    }

    /// View of the current request.
    #[must_use]
    pub fn request(&self) -> &HttpMessage {
        &self.request
    }
}

impl IntoResponse for InertiaResponse {
    fn into_response(self) -> Response {
        match self.into_http() {
            Ok(response) => response.into_response(),
            Err(err) => Error::from(err).into_response(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "inertia response failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
